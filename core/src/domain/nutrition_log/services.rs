use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    alerts::{entities::NutritionAlert, services::evaluate_alert},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    health_plan::ports::{HealthPlanRepository, LlmClient, OcrClient},
    nutrition::{
        ports::{ProfileService, UserProfileRepository},
        services::daily_targets,
    },
    nutrition_log::{
        entities::DailyNutritionTotal,
        ports::{DailyTotalRepository, NutritionLogService},
    },
    recipes::{
        entities::SavedRecipe,
        ports::{RecipeSearchClient, SavedRecipeRepository},
    },
    storage::ports::{ObjectStoragePort, StoredImageRepository},
};

/// Nutrient names as they appear in recipe payloads. Matching is
/// case-sensitive.
pub const NUTRIENT_CALORIES: &str = "Calories";
pub const NUTRIENT_SODIUM: &str = "Sodium";
pub const NUTRIENT_SUGAR: &str = "Sugar";

/// Sum nutrient amounts across a day's snapshots. Missing nutrients
/// contribute zero.
pub fn sum_daily_totals(
    user_id: Uuid,
    date_key: NaiveDate,
    records: &[SavedRecipe],
) -> DailyNutritionTotal {
    let mut calories = 0.0;
    let mut sodium_mg = 0.0;
    let mut sugar_g = 0.0;

    for record in records {
        calories += record.nutrient_amount(NUTRIENT_CALORIES);
        sodium_mg += record.nutrient_amount(NUTRIENT_SODIUM);
        sugar_g += record.nutrient_amount(NUTRIENT_SUGAR);
    }

    DailyNutritionTotal::new(user_id, date_key, calories, sodium_mg, sugar_g)
}

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> NutritionLogService
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
    async fn compute_daily_totals(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<DailyNutritionTotal, CoreError> {
        let records = self
            .saved_recipe_repository
            .list_by_date(user_id, date_key)
            .await?;

        let total = sum_daily_totals(user_id, date_key, &records);
        self.daily_total_repository.upsert(total).await
    }

    async fn get_daily_totals(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<DailyNutritionTotal, CoreError> {
        let total = self
            .daily_total_repository
            .get(user_id, date_key)
            .await?
            .unwrap_or_else(|| DailyNutritionTotal::zero(user_id, date_key));

        Ok(total)
    }

    async fn daily_alert(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<NutritionAlert, CoreError> {
        let profile = self.get_profile(user_id).await?;
        let targets = daily_targets(&profile);
        let totals = self.get_daily_totals(user_id, date_key).await?;

        Ok(evaluate_alert(&totals, &targets))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::sum_daily_totals;
    use crate::domain::common::test_fixtures::fixture_service;
    use crate::domain::nutrition_log::ports::NutritionLogService;
    use crate::domain::recipes::entities::{Nutrient, RecipeCandidate, SavedRecipe};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn snapshot(user_id: Uuid, nutrients: Vec<Nutrient>) -> SavedRecipe {
        SavedRecipe::new(
            user_id,
            date(),
            RecipeCandidate {
                id: 1,
                title: "test".to_string(),
                image: None,
                ready_in_minutes: None,
                servings: None,
                ingredients: vec![],
                nutrients,
            },
        )
    }

    fn nutrient(name: &str, amount: f64) -> Nutrient {
        Nutrient {
            name: name.to_string(),
            amount,
            unit: String::new(),
        }
    }

    #[test]
    fn empty_day_sums_to_zero() {
        let total = sum_daily_totals(Uuid::new_v4(), date(), &[]);

        assert_eq!(total.calories, 0.0);
        assert_eq!(total.sodium_mg, 0.0);
        assert_eq!(total.sugar_g, 0.0);
    }

    #[test]
    fn nutrient_names_match_case_sensitively() {
        let user_id = Uuid::new_v4();
        let records = vec![snapshot(
            user_id,
            vec![
                nutrient("calories", 500.0),
                nutrient("Calories", 320.0),
                nutrient("SODIUM", 900.0),
            ],
        )];

        let total = sum_daily_totals(user_id, date(), &records);

        assert_eq!(total.calories, 320.0);
        assert_eq!(total.sodium_mg, 0.0);
    }

    #[test]
    fn missing_nutrients_contribute_zero() {
        let user_id = Uuid::new_v4();
        let records = vec![
            snapshot(user_id, vec![nutrient("Calories", 420.0)]),
            snapshot(
                user_id,
                vec![nutrient("Sodium", 600.0), nutrient("Sugar", 12.5)],
            ),
        ];

        let total = sum_daily_totals(user_id, date(), &records);

        assert_eq!(total.calories, 420.0);
        assert_eq!(total.sodium_mg, 600.0);
        assert_eq!(total.sugar_g, 12.5);
    }

    #[tokio::test]
    async fn recomputation_is_idempotent() {
        let service = fixture_service();
        let user_id = Uuid::new_v4();
        service.saved_recipe_repository.seed(vec![
            snapshot(user_id, vec![nutrient("Calories", 300.0)]),
            snapshot(
                user_id,
                vec![nutrient("Calories", 250.0), nutrient("Sodium", 800.0)],
            ),
        ]);

        let first = service.compute_daily_totals(user_id, date()).await.unwrap();
        let second = service.compute_daily_totals(user_id, date()).await.unwrap();

        assert_eq!(first.calories, 550.0);
        assert_eq!(first.calories, second.calories);
        assert_eq!(first.sodium_mg, second.sodium_mg);
        assert_eq!(first.sugar_g, second.sugar_g);
        assert_eq!(service.daily_total_repository.upserts(), 2);
    }

    #[tokio::test]
    async fn daily_alert_compares_totals_against_profile_targets() {
        use crate::domain::alerts::entities::NutritionAlert;
        use crate::domain::nutrition::entities::{
            Conditions, Dietary, PersonalInfo, Sex, UserProfile, Weight, WeightUnit,
        };

        let service = fixture_service();
        let user_id = Uuid::new_v4();
        // High blood pressure pins the sodium target at 1500 mg.
        service.user_profile_repository.seed(UserProfile::new(
            user_id,
            PersonalInfo {
                age: 30,
                height_cm: 170.0,
                weight: Weight {
                    value: 154.0,
                    unit: WeightUnit::Lb,
                },
                sex: Sex::Male,
            },
            Conditions {
                high_bp: true,
                ..Conditions::default()
            },
            Dietary::default(),
        ));
        service.saved_recipe_repository.seed(vec![snapshot(
            user_id,
            vec![nutrient("Calories", 600.0), nutrient("Sodium", 1240.0)],
        )]);
        service.compute_daily_totals(user_id, date()).await.unwrap();

        let alert = service.daily_alert(user_id, date()).await.unwrap();

        // 1240 / 1500 is past the 75% warning threshold.
        assert_eq!(alert, NutritionAlert::SodiumWarning);
    }

    #[tokio::test]
    async fn reading_an_unwritten_day_yields_zeros() {
        let service = fixture_service();

        let total = service
            .get_daily_totals(Uuid::new_v4(), date())
            .await
            .unwrap();

        assert_eq!(total.calories, 0.0);
        assert_eq!(total.sodium_mg, 0.0);
        assert_eq!(total.sugar_g, 0.0);
    }
}
