use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lb,
    Kg,
}

/// Body weight tagged with its unit, as entered during profile setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

pub const LB_TO_KG: f64 = 0.453592;

impl Weight {
    pub fn to_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Lb => self.value * LB_TO_KG,
            WeightUnit::Kg => self.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonalInfo {
    pub age: i32,
    pub height_cm: f64,
    pub weight: Weight,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Conditions {
    pub diabetes: bool,
    pub high_bp: bool,
    pub high_cholesterol: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dietary {
    pub vegetarian: bool,
    pub vegan: bool,
    pub low_sodium: bool,
    pub low_carb: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub personal_info: PersonalInfo,
    pub conditions: Conditions,
    pub dietary: Dietary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        id: Uuid,
        personal_info: PersonalInfo,
        conditions: Conditions,
        dietary: Dietary,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            personal_info,
            conditions,
            dietary,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, personal_info: PersonalInfo, conditions: Conditions, dietary: Dietary) {
        let (now, _) = generate_timestamp();

        self.personal_info = personal_info;
        self.conditions = conditions;
        self.dietary = dietary;
        self.updated_at = now;
    }
}
