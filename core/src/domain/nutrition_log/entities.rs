use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Materialized per-day nutrient sums for a user. Always equals the sum over
/// the saved-recipe snapshots stored under the same (user, day) key at
/// computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyNutritionTotal {
    pub user_id: Uuid,
    pub date_key: NaiveDate,
    pub calories: f64,
    pub sodium_mg: f64,
    pub sugar_g: f64,
    pub updated_at: DateTime<Utc>,
}

impl DailyNutritionTotal {
    pub fn new(
        user_id: Uuid,
        date_key: NaiveDate,
        calories: f64,
        sodium_mg: f64,
        sugar_g: f64,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            date_key,
            calories,
            sodium_mg,
            sugar_g,
            updated_at: now,
        }
    }

    /// A day with no saved recipes. Not an error state.
    pub fn zero(user_id: Uuid, date_key: NaiveDate) -> Self {
        Self::new(user_id, date_key, 0.0, 0.0, 0.0)
    }
}
