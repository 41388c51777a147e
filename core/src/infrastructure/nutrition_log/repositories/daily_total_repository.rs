use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition_log::{entities::DailyNutritionTotal, ports::DailyTotalRepository},
    },
    entity::daily_totals::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDailyTotalRepository {
    pub db: DatabaseConnection,
}

impl PostgresDailyTotalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DailyTotalRepository for PostgresDailyTotalRepository {
    async fn upsert(&self, total: DailyNutritionTotal) -> Result<DailyNutritionTotal, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(total.user_id),
            date_key: Set(total.date_key),
            calories: Set(total.calories),
            sodium_mg: Set(total.sodium_mg),
            sugar_g: Set(total.sugar_g),
            updated_at: Set(total.updated_at.fixed_offset()),
        };

        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::DateKey])
                    .update_columns([
                        Column::Calories,
                        Column::SodiumMg,
                        Column::SugarG,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert daily totals: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(DailyNutritionTotal::from(&stored))
    }

    async fn get(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<Option<DailyNutritionTotal>, CoreError> {
        let total = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DateKey.eq(date_key))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get daily totals: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(total.as_ref().map(DailyNutritionTotal::from))
    }
}
