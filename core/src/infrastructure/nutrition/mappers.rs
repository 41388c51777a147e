use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition::entities::{
            Conditions, Dietary, PersonalInfo, Sex, UserProfile, Weight, WeightUnit,
        },
    },
    entity::user_profiles,
};

pub fn sex_as_str(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "male",
        Sex::Female => "female",
    }
}

pub fn weight_unit_as_str(unit: WeightUnit) -> &'static str {
    match unit {
        WeightUnit::Lb => "lb",
        WeightUnit::Kg => "kg",
    }
}

impl TryFrom<&user_profiles::Model> for UserProfile {
    type Error = CoreError;

    fn try_from(model: &user_profiles::Model) -> Result<Self, Self::Error> {
        let sex = match model.sex.as_str() {
            "male" => Sex::Male,
            "female" => Sex::Female,
            other => return Err(CoreError::Invalid(format!("unknown sex value: {other}"))),
        };

        let unit = match model.weight_unit.as_str() {
            "lb" => WeightUnit::Lb,
            "kg" => WeightUnit::Kg,
            other => {
                return Err(CoreError::Invalid(format!(
                    "unknown weight unit: {other}"
                )));
            }
        };

        Ok(Self {
            id: model.id,
            personal_info: PersonalInfo {
                age: model.age,
                height_cm: model.height_cm,
                weight: Weight {
                    value: model.weight,
                    unit,
                },
                sex,
            },
            conditions: Conditions {
                diabetes: model.diabetes,
                high_bp: model.high_bp,
                high_cholesterol: model.high_cholesterol,
            },
            dietary: Dietary {
                vegetarian: model.vegetarian,
                vegan: model.vegan,
                low_sodium: model.low_sodium,
                low_carb: model.low_carb,
            },
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}
