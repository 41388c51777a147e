use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::nutrition_log::entities::DailyNutritionTotal;
use crate::domain::recipes::entities::{RecipeCandidate, SavedRecipe};

/// Search hit from the ingredient search endpoint, before detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FindRecipesInput {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub number: u32,
}

#[derive(Debug, Clone)]
pub struct SaveRecipeInput {
    pub user_id: Uuid,
    pub recipe: RecipeCandidate,
}

/// A saved snapshot together with the recomputed totals for its day.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecipeOutcome {
    pub saved: SavedRecipe,
    pub totals: DailyNutritionTotal,
}
