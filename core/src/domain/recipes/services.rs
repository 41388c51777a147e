use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    health_plan::ports::{HealthPlanRepository, LlmClient, OcrClient},
    nutrition::ports::UserProfileRepository,
    nutrition_log::ports::{DailyTotalRepository, NutritionLogService},
    recipes::{
        entities::{RecipeCandidate, SavedRecipe},
        policies::{MatchStrategy, filter_excluded},
        ports::{RecipeSearchClient, RecipeService, SavedRecipeRepository},
        value_objects::{FindRecipesInput, SaveRecipeInput, SaveRecipeOutcome},
    },
    storage::ports::{ObjectStoragePort, StoredImageRepository},
};

/// Upstream page size when the caller does not ask for a specific count.
pub const DEFAULT_SEARCH_RESULTS: u32 = 10;

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> RecipeService
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
    async fn find_recipes(&self, input: FindRecipesInput) -> Result<Vec<RecipeCandidate>, CoreError> {
        if input.include.is_empty() {
            return Err(CoreError::NoIngredients);
        }

        let summaries = self
            .recipe_client
            .search_by_ingredients(input.include, input.number)
            .await?;

        if summaries.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<i64> = summaries.iter().map(|s| s.id).collect();
        let detailed = self.recipe_client.get_information_bulk(ids).await?;

        Ok(filter_excluded(
            detailed,
            &input.exclude,
            MatchStrategy::default(),
        ))
    }

    async fn save_recipe(&self, input: SaveRecipeInput) -> Result<SaveRecipeOutcome, CoreError> {
        let date_key = Utc::now().date_naive();

        let saved = self
            .saved_recipe_repository
            .append(SavedRecipe::new(input.user_id, date_key, input.recipe))
            .await?;

        // Totals are a materialized view over the day's snapshots; refresh
        // them on every save.
        let totals = self.compute_daily_totals(input.user_id, date_key).await?;

        Ok(SaveRecipeOutcome { saved, totals })
    }

    async fn get_saved_recipes(
        &self,
        user_id: Uuid,
        date_key: NaiveDate,
    ) -> Result<Vec<SavedRecipe>, CoreError> {
        self.saved_recipe_repository
            .list_by_date(user_id, date_key)
            .await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::common::test_fixtures::fixture_service;
    use crate::domain::recipes::{
        entities::{Nutrient, RecipeCandidate, RecipeIngredient},
        ports::RecipeService,
        value_objects::{FindRecipesInput, RecipeSummary, SaveRecipeInput},
    };

    fn candidate(id: i64, ingredient_names: &[&str]) -> RecipeCandidate {
        RecipeCandidate {
            id,
            title: format!("recipe {id}"),
            image: None,
            ready_in_minutes: Some(25),
            servings: Some(4),
            ingredients: ingredient_names
                .iter()
                .map(|name| RecipeIngredient {
                    name: (*name).to_string(),
                    original: format!("some {name}"),
                })
                .collect(),
            nutrients: vec![Nutrient {
                name: "Calories".to_string(),
                amount: 400.0,
                unit: "kcal".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn empty_include_list_fails_before_any_network_call() {
        let service = fixture_service();

        let err = service
            .find_recipes(FindRecipesInput {
                include: vec![],
                exclude: vec![],
                number: 10,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NoIngredients);
        assert_eq!(service.recipe_client.search_calls(), 0);
        assert_eq!(service.recipe_client.bulk_calls(), 0);
    }

    #[tokio::test]
    async fn excluded_term_drops_recipes_by_substring() {
        let service = fixture_service();
        service
            .recipe_client
            .seed_search(vec![
                RecipeSummary {
                    id: 1,
                    title: "walnut chicken".to_string(),
                    image: None,
                },
                RecipeSummary {
                    id: 2,
                    title: "plain chicken".to_string(),
                    image: None,
                },
            ])
            .seed_bulk(vec![
                candidate(1, &["chicken", "walnut oil"]),
                candidate(2, &["chicken", "rice"]),
            ]);

        let recipes = service
            .find_recipes(FindRecipesInput {
                include: vec!["chicken".to_string()],
                exclude: vec!["nut".to_string()],
                number: 10,
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, 2);
        assert_eq!(service.recipe_client.bulk_calls(), 1);
    }

    #[tokio::test]
    async fn no_search_hits_skips_the_bulk_fetch() {
        let service = fixture_service();

        let recipes = service
            .find_recipes(FindRecipesInput {
                include: vec!["dragonfruit".to_string()],
                exclude: vec![],
                number: 10,
            })
            .await
            .unwrap();

        assert!(recipes.is_empty());
        assert_eq!(service.recipe_client.search_calls(), 1);
        assert_eq!(service.recipe_client.bulk_calls(), 0);
    }

    #[tokio::test]
    async fn save_recipe_appends_a_snapshot_and_recomputes_totals() {
        let service = fixture_service();
        let user_id = Uuid::new_v4();

        let outcome = service
            .save_recipe(SaveRecipeInput {
                user_id,
                recipe: candidate(7, &["chicken"]),
            })
            .await
            .unwrap();

        assert_eq!(outcome.saved.recipe_id, 7);
        assert_eq!(outcome.totals.calories, 400.0);
        assert_eq!(
            service.daily_total_repository.upserts(),
            1,
            "save must persist recomputed totals"
        );
    }
}
