use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The single alert shown on the dashboard for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NutritionAlert {
    NothingLoggedYet,
    SodiumWarning,
    CalorieLimitReached,
    SodiumLimitExceeded,
    SugarLimitReached,
    OnTrack,
}

impl NutritionAlert {
    pub fn message(&self) -> &'static str {
        match self {
            NutritionAlert::NothingLoggedYet => {
                "You haven't eaten yet today. Log a meal to start tracking."
            }
            NutritionAlert::SodiumWarning => {
                "Your sodium intake is high. Consider low-sodium recipes for your next meal."
            }
            NutritionAlert::CalorieLimitReached => {
                "You've reached your calorie target for today."
            }
            NutritionAlert::SodiumLimitExceeded => {
                "You've exceeded your sodium limit for today."
            }
            NutritionAlert::SugarLimitReached => {
                "You've reached your sugar limit for today."
            }
            NutritionAlert::OnTrack => {
                "Great job! You're on track with your nutrition goals today."
            }
        }
    }
}
