use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    health_plan::ports::{HealthPlanRepository, LlmClient, OcrClient},
    nutrition::{
        entities::{Conditions, Dietary, PersonalInfo, Sex, UserProfile},
        ports::{ProfileService, UserProfileRepository},
        value_objects::{NutritionTargets, UpdateProfileInput},
    },
    nutrition_log::ports::DailyTotalRepository,
    recipes::ports::{RecipeSearchClient, SavedRecipeRepository},
    storage::ports::{ObjectStoragePort, StoredImageRepository},
};

/// Fixed sedentary activity multiplier applied on top of BMR.
pub const SEDENTARY_ACTIVITY_FACTOR: f64 = 1.2;

/// Default and restricted daily sodium targets (mg).
pub const SODIUM_DEFAULT_MG: i32 = 2300;
pub const SODIUM_RESTRICTED_MG: i32 = 1500;

/// Fraction of daily calories allowed from sugar, and kcal per gram of sugar.
pub const SUGAR_CALORIE_SHARE: f64 = 0.10;
pub const KCAL_PER_GRAM_SUGAR: f64 = 4.0;

/// Estimated daily calorie needs via Mifflin-St Jeor, sedentary activity.
///
/// Inputs are taken as-is; implausible values produce whatever the formula
/// yields.
pub fn calculate_calories(info: &PersonalInfo) -> i32 {
    let weight_kg = info.weight.to_kg();

    let bmr = match info.sex {
        Sex::Male => 10.0 * weight_kg + 6.25 * info.height_cm - 5.0 * f64::from(info.age) + 5.0,
        Sex::Female => 10.0 * weight_kg + 6.25 * info.height_cm - 5.0 * f64::from(info.age) - 161.0,
    };

    (bmr * SEDENTARY_ACTIVITY_FACTOR).round() as i32
}

/// Daily sodium target in mg: 1500 for high blood pressure or a low-sodium
/// diet, 2300 otherwise.
pub fn calculate_sodium_target(conditions: &Conditions, dietary: &Dietary) -> i32 {
    if conditions.high_bp || dietary.low_sodium {
        SODIUM_RESTRICTED_MG
    } else {
        SODIUM_DEFAULT_MG
    }
}

/// Daily sugar limit in grams: 10% of calories, halved for diabetes,
/// converted at 4 kcal per gram.
pub fn calculate_sugar_limit(calories: i32, conditions: &Conditions) -> i32 {
    let mut sugar_calories = f64::from(calories) * SUGAR_CALORIE_SHARE;
    if conditions.diabetes {
        sugar_calories *= 0.5;
    }

    (sugar_calories / KCAL_PER_GRAM_SUGAR).round() as i32
}

pub fn daily_targets(profile: &UserProfile) -> NutritionTargets {
    let calories = calculate_calories(&profile.personal_info);

    NutritionTargets {
        calories,
        sodium_mg: calculate_sodium_target(&profile.conditions, &profile.dietary),
        sugar_g: calculate_sugar_limit(calories, &profile.conditions),
    }
}

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> ProfileService
    for Service<U, HP, O, L, R, SR, DT, HC, OS, SI>
where
    U: UserProfileRepository,
    HP: HealthPlanRepository,
    O: OcrClient,
    L: LlmClient,
    R: RecipeSearchClient,
    SR: SavedRecipeRepository,
    DT: DailyTotalRepository,
    HC: HealthCheckRepository,
    OS: ObjectStoragePort,
    SI: StoredImageRepository,
{
    async fn update_profile(&self, input: UpdateProfileInput) -> Result<UserProfile, CoreError> {
        let profile = match self
            .user_profile_repository
            .get_by_user(input.user_id)
            .await?
        {
            Some(mut existing) => {
                existing.update(input.personal_info, input.conditions, input.dietary);
                existing
            }
            None => UserProfile::new(
                input.user_id,
                input.personal_info,
                input.conditions,
                input.dietary,
            ),
        };

        self.user_profile_repository.upsert(profile).await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        self.user_profile_repository
            .get_by_user(user_id)
            .await?
            .ok_or(CoreError::ProfileNotFound)
    }

    async fn get_targets(&self, user_id: Uuid) -> Result<NutritionTargets, CoreError> {
        let profile = self.get_profile(user_id).await?;

        Ok(daily_targets(&profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::{Weight, WeightUnit};

    fn info(age: i32, height_cm: f64, weight_lb: f64, sex: Sex) -> PersonalInfo {
        PersonalInfo {
            age,
            height_cm,
            weight: Weight {
                value: weight_lb,
                unit: WeightUnit::Lb,
            },
            sex,
        }
    }

    #[test]
    fn calories_male_matches_formula() {
        // 154 lb -> 69.853168 kg; BMR = 698.53168 + 1062.5 - 150 + 5
        // = 1616.03168; x1.2 = 1939.238 -> 1939
        let got = calculate_calories(&info(30, 170.0, 154.0, Sex::Male));
        assert_eq!(got, 1939);
    }

    #[test]
    fn calories_female_uses_minus_161_offset() {
        let got = calculate_calories(&info(30, 170.0, 154.0, Sex::Female));
        assert_eq!(got, 1740);
    }

    #[test]
    fn calories_kg_weight_is_not_converted() {
        let kg = PersonalInfo {
            age: 30,
            height_cm: 170.0,
            weight: Weight {
                value: 70.0,
                unit: WeightUnit::Kg,
            },
            sex: Sex::Male,
        };
        // BMR = 700 + 1062.5 - 150 + 5 = 1617.5; x1.2 = 1941
        assert_eq!(calculate_calories(&kg), 1941);
    }

    #[test]
    fn sodium_target_is_1500_iff_high_bp_or_low_sodium() {
        let cases = [
            (false, false, SODIUM_DEFAULT_MG),
            (true, false, SODIUM_RESTRICTED_MG),
            (false, true, SODIUM_RESTRICTED_MG),
            (true, true, SODIUM_RESTRICTED_MG),
        ];

        for (high_bp, low_sodium, expected) in cases {
            let conditions = Conditions {
                high_bp,
                ..Conditions::default()
            };
            let dietary = Dietary {
                low_sodium,
                ..Dietary::default()
            };
            assert_eq!(calculate_sodium_target(&conditions, &dietary), expected);
        }
    }

    #[test]
    fn sugar_limit_basic() {
        assert_eq!(calculate_sugar_limit(2000, &Conditions::default()), 50);
    }

    #[test]
    fn sugar_limit_halved_for_diabetes() {
        let diabetic = Conditions {
            diabetes: true,
            ..Conditions::default()
        };

        for calories in [1200, 1939, 2000, 2437, 3000] {
            let base = calculate_sugar_limit(calories, &Conditions::default());
            let halved = calculate_sugar_limit(calories, &diabetic);
            let expected = (f64::from(base) / 2.0).round() as i32;
            assert!(
                (halved - expected).abs() <= 1,
                "calories={calories}: halved={halved}, expected~{expected}"
            );
        }
    }

    #[test]
    fn targets_bundle_uses_computed_calories_for_sugar() {
        let profile = UserProfile::new(
            uuid::Uuid::new_v4(),
            info(30, 170.0, 154.0, Sex::Male),
            Conditions::default(),
            Dietary::default(),
        );
        let targets = daily_targets(&profile);

        assert_eq!(targets.calories, 1939);
        assert_eq!(targets.sodium_mg, SODIUM_DEFAULT_MG);
        assert_eq!(
            targets.sugar_g,
            calculate_sugar_limit(1939, &Conditions::default())
        );
    }
}
