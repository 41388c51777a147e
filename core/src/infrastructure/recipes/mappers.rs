use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipes::entities::{Nutrient, SavedRecipe},
    },
    entity::saved_recipes,
};

impl TryFrom<&saved_recipes::Model> for SavedRecipe {
    type Error = CoreError;

    fn try_from(model: &saved_recipes::Model) -> Result<Self, Self::Error> {
        let nutrients: Vec<Nutrient> =
            serde_json::from_value(model.nutrients.clone()).map_err(|e| {
                error!("Corrupt saved recipe nutrients payload: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            date_key: model.date_key,
            recipe_id: model.recipe_id,
            title: model.title.clone(),
            image: model.image.clone(),
            ready_in_minutes: model.ready_in_minutes,
            servings: model.servings,
            nutrients,
            created_at: model.created_at.to_utc(),
        })
    }
}
