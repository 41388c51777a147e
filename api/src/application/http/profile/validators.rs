use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use demeter_core::domain::nutrition::entities::{Conditions, Dietary, Sex, WeightUnit};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: i32,

    #[validate(range(min = 1.0, message = "height_cm must be positive"))]
    pub height_cm: f64,

    #[validate(range(min = 1.0, message = "weight must be positive"))]
    pub weight: f64,

    pub weight_unit: WeightUnit,

    pub sex: Sex,

    #[serde(default)]
    pub conditions: Conditions,

    #[serde(default)]
    pub dietary: Dietary,
}
