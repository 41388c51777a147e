use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{RecipeApiConfig, entities::app_errors::CoreError},
    recipes::{
        entities::{Nutrient, RecipeCandidate, RecipeIngredient},
        ports::RecipeSearchClient,
        value_objects::RecipeSummary,
    },
};

#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: i64,
    title: String,
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireIngredient {
    #[serde(default)]
    name: String,
    #[serde(default)]
    original: String,
}

#[derive(Debug, Deserialize)]
struct WireNutrient {
    name: String,
    amount: f64,
    #[serde(default)]
    unit: String,
}

#[derive(Debug, Deserialize)]
struct WireNutrition {
    #[serde(default)]
    nutrients: Vec<WireNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecipeInformation {
    id: i64,
    title: String,
    image: Option<String>,
    ready_in_minutes: Option<i32>,
    servings: Option<i32>,
    #[serde(default)]
    extended_ingredients: Vec<WireIngredient>,
    nutrition: Option<WireNutrition>,
}

impl From<WireRecipeInformation> for RecipeCandidate {
    fn from(wire: WireRecipeInformation) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            image: wire.image,
            ready_in_minutes: wire.ready_in_minutes,
            servings: wire.servings,
            ingredients: wire
                .extended_ingredients
                .into_iter()
                .map(|i| RecipeIngredient {
                    name: i.name,
                    original: i.original,
                })
                .collect(),
            nutrients: wire
                .nutrition
                .map(|n| {
                    n.nutrients
                        .into_iter()
                        .map(|n| Nutrient {
                            name: n.name,
                            amount: n.amount,
                            unit: n.unit,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

static COMMA_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid literal regex"));
static REPEATED_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",+").expect("valid literal regex"));

/// Joins ingredient names into the comma-separated form the API expects,
/// squeezing stray whitespace and empty segments out.
fn sanitize_ingredients(ingredients: &[String]) -> String {
    let joined = ingredients.join(",");
    let spaced = COMMA_SPACING.replace_all(joined.trim(), ",");

    REPEATED_COMMAS
        .replace_all(&spaced, ",")
        .trim_matches(',')
        .to_string()
}

impl SpoonacularClient {
    pub fn new(config: RecipeApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            client: Client::new(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Recipe API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recipe API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Recipe API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse recipe API response: {}", e);
            CoreError::ExternalServiceError(format!(
                "Failed to parse recipe API response: {}",
                e
            ))
        })
    }
}

impl RecipeSearchClient for SpoonacularClient {
    async fn search_by_ingredients(
        &self,
        include: Vec<String>,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, CoreError> {
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let hits: Vec<SearchHit> = self
            .get_json(
                url,
                &[
                    ("ingredients", sanitize_ingredients(&include)),
                    ("number", number.to_string()),
                    // Maximize used ingredients; pantry staples don't count.
                    ("ranking", "1".to_string()),
                    ("ignorePantry", "true".to_string()),
                ],
            )
            .await?;

        Ok(hits
            .into_iter()
            .map(|h| RecipeSummary {
                id: h.id,
                title: h.title,
                image: h.image,
            })
            .collect())
    }

    async fn get_information_bulk(
        &self,
        ids: Vec<i64>,
    ) -> Result<Vec<RecipeCandidate>, CoreError> {
        let url = format!("{}/recipes/informationBulk", self.base_url);
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let recipes: Vec<WireRecipeInformation> = self
            .get_json(
                url,
                &[
                    ("ids", joined),
                    ("includeNutrition", "true".to_string()),
                ],
            )
            .await?;

        Ok(recipes.into_iter().map(RecipeCandidate::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_squeezes_whitespace_and_empty_segments() {
        let ingredients = vec![
            " chicken breast".to_string(),
            "".to_string(),
            "rice , ".to_string(),
        ];

        assert_eq!(sanitize_ingredients(&ingredients), "chicken breast,rice");
    }

    #[test]
    fn recipe_information_parses_the_bulk_payload() {
        let raw = r#"{
            "id": 715538,
            "title": "Bruschetta Style Pork & Pasta",
            "image": "https://img.spoonacular.com/recipes/715538-312x231.jpg",
            "readyInMinutes": 35,
            "servings": 4,
            "extendedIngredients": [
                {"name": "pork tenderloin", "original": "1 lb pork tenderloin"},
                {"name": "pasta", "original": "8 oz pasta"}
            ],
            "nutrition": {
                "nutrients": [
                    {"name": "Calories", "amount": 521.4, "unit": "kcal"},
                    {"name": "Sodium", "amount": 392.2, "unit": "mg"}
                ]
            }
        }"#;

        let wire: WireRecipeInformation = serde_json::from_str(raw).unwrap();
        let candidate = RecipeCandidate::from(wire);

        assert_eq!(candidate.id, 715538);
        assert_eq!(candidate.ready_in_minutes, Some(35));
        assert_eq!(candidate.ingredients.len(), 2);
        assert_eq!(candidate.nutrients[0].name, "Calories");
        assert_eq!(candidate.nutrients[0].amount, 521.4);
    }

    #[test]
    fn missing_ingredients_and_nutrition_default_to_empty() {
        let raw = r#"{"id": 1, "title": "mystery stew", "image": null}"#;

        let wire: WireRecipeInformation = serde_json::from_str(raw).unwrap();
        let candidate = RecipeCandidate::from(wire);

        assert!(candidate.ingredients.is_empty());
        assert!(candidate.nutrients.is_empty());
    }
}
