use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::nutrition::entities::{Conditions, Dietary, PersonalInfo};

/// Daily intake targets derived from a profile. Calories in kcal, sodium in
/// milligrams, sugar in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTargets {
    pub calories: i32,
    pub sodium_mg: i32,
    pub sugar_g: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub user_id: Uuid,
    pub personal_info: PersonalInfo,
    pub conditions: Conditions,
    pub dietary: Dietary,
}
