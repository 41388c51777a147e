use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub original: String,
}

/// Full recipe detail as returned by the upstream recipe API. Immutable once
/// fetched; `id` is the upstream identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeCandidate {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub ingredients: Vec<RecipeIngredient>,
    pub nutrients: Vec<Nutrient>,
}

/// Snapshot of a recipe the user confirmed cooking, grouped by calendar day
/// for aggregation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date_key: NaiveDate,
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub nutrients: Vec<Nutrient>,
    pub created_at: DateTime<Utc>,
}

impl SavedRecipe {
    pub fn new(user_id: Uuid, date_key: NaiveDate, recipe: RecipeCandidate) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            date_key,
            recipe_id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            nutrients: recipe.nutrients,
            created_at: now,
        }
    }

    /// Amount of the named nutrient. Names match case-sensitively; a missing
    /// nutrient contributes zero.
    pub fn nutrient_amount(&self, name: &str) -> f64 {
        self.nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount)
            .unwrap_or(0.0)
    }
}
