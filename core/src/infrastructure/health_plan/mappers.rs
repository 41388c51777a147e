use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health_plan::entities::{FridgeScan, HealthInsight, HealthPlan, OcrResult},
    },
    entity::{fridge_scans, health_plans, ocr_results},
};

impl From<&ocr_results::Model> for OcrResult {
    fn from(model: &ocr_results::Model) -> Self {
        Self {
            user_id: model.user_id,
            full_text: model.full_text.clone(),
            file_path: model.file_path.clone(),
            fetched_at: model.fetched_at.to_utc(),
        }
    }
}

impl TryFrom<&fridge_scans::Model> for FridgeScan {
    type Error = CoreError;

    fn try_from(model: &fridge_scans::Model) -> Result<Self, Self::Error> {
        let ingredients: Vec<String> =
            serde_json::from_value(model.ingredients.clone()).map_err(|e| {
                error!("Corrupt fridge scan ingredients payload: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            user_id: model.user_id,
            ingredients,
            fetched_at: model.fetched_at.to_utc(),
        })
    }
}

impl TryFrom<&health_plans::Model> for HealthPlan {
    type Error = CoreError;

    fn try_from(model: &health_plans::Model) -> Result<Self, Self::Error> {
        let include: Vec<String> =
            serde_json::from_value(model.include_ingredients.clone()).map_err(|e| {
                error!("Corrupt health plan include payload: {}", e);
                CoreError::InternalServerError
            })?;
        let exclude: Vec<String> =
            serde_json::from_value(model.exclude_ingredients.clone()).map_err(|e| {
                error!("Corrupt health plan exclude payload: {}", e);
                CoreError::InternalServerError
            })?;
        let health_insights: Vec<HealthInsight> =
            serde_json::from_value(model.health_insights.clone()).map_err(|e| {
                error!("Corrupt health plan insights payload: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            user_id: model.user_id,
            include,
            exclude,
            health_insights,
            nutrition_tips: model.nutrition_tips.clone(),
            smart_shopping: model.smart_shopping.clone(),
            created_at: model.created_at.to_utc(),
        })
    }
}
