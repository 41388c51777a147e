use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::health_plan::value_objects::CategorizationPayload;

/// Cached categorization inputs and results are reused for this long before
/// the paid extraction calls run again.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;

fn is_fresh(stamped_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - stamped_at < Duration::hours(FRESHNESS_WINDOW_HOURS)
}

/// Text extracted from the user's most recent medical-report image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OcrResult {
    pub user_id: Uuid,
    pub full_text: String,
    pub file_path: String,
    pub fetched_at: DateTime<Utc>,
}

impl OcrResult {
    pub fn new(user_id: Uuid, full_text: String, file_path: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            full_text,
            file_path,
            fetched_at: now,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        is_fresh(self.fetched_at, now)
    }
}

/// Ingredient names recognized in the user's most recent fridge image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FridgeScan {
    pub user_id: Uuid,
    pub ingredients: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl FridgeScan {
    pub fn new(user_id: Uuid, ingredients: Vec<String>) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            ingredients,
            fetched_at: now,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        is_fresh(self.fetched_at, now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthInsight {
    pub title: String,
    pub summary: String,
}

/// Categorization of the user's fridge ingredients against their medical
/// report. One current plan per user, last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthPlan {
    pub user_id: Uuid,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub health_insights: Vec<HealthInsight>,
    pub nutrition_tips: String,
    pub smart_shopping: String,
    pub created_at: DateTime<Utc>,
}

impl HealthPlan {
    pub fn new(user_id: Uuid, payload: CategorizationPayload) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            include: payload.include,
            exclude: payload.exclude,
            health_insights: payload.health_insights,
            nutrition_tips: payload.nutrition_tips,
            smart_shopping: payload.smart_shopping,
            created_at: now,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        is_fresh(self.created_at, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_window_is_open_at_24_hours() {
        let fetched = Utc::now();
        let result = OcrResult {
            user_id: Uuid::new_v4(),
            full_text: "glucose 180 mg/dL".to_string(),
            file_path: "reports/r1.jpg".to_string(),
            fetched_at: fetched,
        };

        assert!(result.is_fresh(fetched + Duration::hours(23)));
        assert!(!result.is_fresh(fetched + Duration::hours(24)));
        assert!(!result.is_fresh(fetched + Duration::hours(25)));
    }
}
