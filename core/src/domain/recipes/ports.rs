use chrono::NaiveDate;
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipes::{
        entities::{RecipeCandidate, SavedRecipe},
        value_objects::{FindRecipesInput, RecipeSummary, SaveRecipeInput, SaveRecipeOutcome},
    },
};

/// Client trait for the external recipe API
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSearchClient: Send + Sync {
    fn search_by_ingredients(
        &self,
        include: Vec<String>,
        number: u32,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    fn get_information_bulk(
        &self,
        ids: Vec<i64>,
    ) -> impl Future<Output = Result<Vec<RecipeCandidate>, CoreError>> + Send;
}

/// Repository trait for saved recipe snapshots, append-only per (user, day)
#[cfg_attr(test, mockall::automock)]
pub trait SavedRecipeRepository: Send + Sync {
    fn append(
        &self,
        recipe: SavedRecipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn list_by_date(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;
}

/// Service trait for recipe matching and saving
pub trait RecipeService: Send + Sync {
    fn find_recipes(
        &self,
        input: FindRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeCandidate>, CoreError>> + Send;

    fn save_recipe(
        &self,
        input: SaveRecipeInput,
    ) -> impl Future<Output = Result<SaveRecipeOutcome, CoreError>> + Send;

    fn get_saved_recipes(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;
}
