use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health_plan::{
            entities::{FridgeScan, HealthPlan, OcrResult},
            ports::HealthPlanRepository,
        },
    },
    entity::{fridge_scans, health_plans, ocr_results},
};

/// One row per user for each cached artifact; every upsert replaces the
/// previous row.
#[derive(Debug, Clone)]
pub struct PostgresHealthPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthPlanRepository for PostgresHealthPlanRepository {
    async fn get_ocr_result(&self, user_id: Uuid) -> Result<Option<OcrResult>, CoreError> {
        let result = ocr_results::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get OCR result: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.as_ref().map(OcrResult::from))
    }

    async fn upsert_ocr_result(&self, result: OcrResult) -> Result<OcrResult, CoreError> {
        let active_model = ocr_results::ActiveModel {
            user_id: Set(result.user_id),
            full_text: Set(result.full_text.clone()),
            file_path: Set(result.file_path.clone()),
            fetched_at: Set(result.fetched_at.fixed_offset()),
        };

        let stored = ocr_results::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(ocr_results::Column::UserId)
                    .update_columns([
                        ocr_results::Column::FullText,
                        ocr_results::Column::FilePath,
                        ocr_results::Column::FetchedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert OCR result: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(OcrResult::from(&stored))
    }

    async fn get_fridge_scan(&self, user_id: Uuid) -> Result<Option<FridgeScan>, CoreError> {
        let scan = fridge_scans::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get fridge scan: {}", e);
                CoreError::InternalServerError
            })?;

        scan.as_ref().map(FridgeScan::try_from).transpose()
    }

    async fn upsert_fridge_scan(&self, scan: FridgeScan) -> Result<FridgeScan, CoreError> {
        let ingredients = serde_json::to_value(&scan.ingredients).map_err(|e| {
            error!("Failed to serialize fridge scan ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = fridge_scans::ActiveModel {
            user_id: Set(scan.user_id),
            ingredients: Set(ingredients),
            fetched_at: Set(scan.fetched_at.fixed_offset()),
        };

        let stored = fridge_scans::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(fridge_scans::Column::UserId)
                    .update_columns([
                        fridge_scans::Column::Ingredients,
                        fridge_scans::Column::FetchedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert fridge scan: {}", e);
                CoreError::InternalServerError
            })?;

        FridgeScan::try_from(&stored)
    }

    async fn get_health_plan(&self, user_id: Uuid) -> Result<Option<HealthPlan>, CoreError> {
        let plan = health_plans::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get health plan: {}", e);
                CoreError::InternalServerError
            })?;

        plan.as_ref().map(HealthPlan::try_from).transpose()
    }

    async fn upsert_health_plan(&self, plan: HealthPlan) -> Result<HealthPlan, CoreError> {
        let include = serde_json::to_value(&plan.include).map_err(|e| {
            error!("Failed to serialize include list: {}", e);
            CoreError::InternalServerError
        })?;
        let exclude = serde_json::to_value(&plan.exclude).map_err(|e| {
            error!("Failed to serialize exclude list: {}", e);
            CoreError::InternalServerError
        })?;
        let insights = serde_json::to_value(&plan.health_insights).map_err(|e| {
            error!("Failed to serialize health insights: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = health_plans::ActiveModel {
            user_id: Set(plan.user_id),
            include_ingredients: Set(include),
            exclude_ingredients: Set(exclude),
            health_insights: Set(insights),
            nutrition_tips: Set(plan.nutrition_tips.clone()),
            smart_shopping: Set(plan.smart_shopping.clone()),
            created_at: Set(plan.created_at.fixed_offset()),
        };

        let stored = health_plans::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(health_plans::Column::UserId)
                    .update_columns([
                        health_plans::Column::IncludeIngredients,
                        health_plans::Column::ExcludeIngredients,
                        health_plans::Column::HealthInsights,
                        health_plans::Column::NutritionTips,
                        health_plans::Column::SmartShopping,
                        health_plans::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert health plan: {}", e);
                CoreError::InternalServerError
            })?;

        HealthPlan::try_from(&stored)
    }
}
