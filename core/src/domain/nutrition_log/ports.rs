use chrono::NaiveDate;
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    alerts::entities::NutritionAlert, common::entities::app_errors::CoreError,
    nutrition_log::entities::DailyNutritionTotal,
};

/// Repository trait for materialized daily totals, keyed by (user, day)
#[cfg_attr(test, mockall::automock)]
pub trait DailyTotalRepository: Send + Sync {
    fn upsert(
        &self,
        total: DailyNutritionTotal,
    ) -> impl Future<Output = Result<DailyNutritionTotal, CoreError>> + Send;

    fn get(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> impl Future<Output = Result<Option<DailyNutritionTotal>, CoreError>> + Send;
}

/// Service trait for daily aggregation and alerting
pub trait NutritionLogService: Send + Sync {
    /// Recompute the totals for (user, day) from scratch and persist them.
    fn compute_daily_totals(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> impl Future<Output = Result<DailyNutritionTotal, CoreError>> + Send;

    /// Read the stored totals, zeros when the day has no record.
    fn get_daily_totals(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> impl Future<Output = Result<DailyNutritionTotal, CoreError>> + Send;

    fn daily_alert(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> impl Future<Output = Result<NutritionAlert, CoreError>> + Send;
}
