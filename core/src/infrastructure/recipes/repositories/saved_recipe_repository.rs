use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipes::{entities::SavedRecipe, ports::SavedRecipeRepository},
    },
    entity::saved_recipes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresSavedRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresSavedRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SavedRecipeRepository for PostgresSavedRecipeRepository {
    async fn append(&self, recipe: SavedRecipe) -> Result<SavedRecipe, CoreError> {
        let nutrients = serde_json::to_value(&recipe.nutrients).map_err(|e| {
            error!("Failed to serialize saved recipe nutrients: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            date_key: Set(recipe.date_key),
            recipe_id: Set(recipe.recipe_id),
            title: Set(recipe.title.clone()),
            image: Set(recipe.image.clone()),
            ready_in_minutes: Set(recipe.ready_in_minutes),
            servings: Set(recipe.servings),
            nutrients: Set(nutrients),
            created_at: Set(recipe.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to append saved recipe: {}", e);
                CoreError::InternalServerError
            })?;

        SavedRecipe::try_from(&created)
    }

    async fn list_by_date(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<Vec<SavedRecipe>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DateKey.eq(date_key))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list saved recipes: {}", e);
                CoreError::InternalServerError
            })?;

        models.iter().map(SavedRecipe::try_from).collect()
    }
}
