use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::{
    nutrition_log::entities::DailyNutritionTotal,
    recipes::{
        entities::{RecipeCandidate, SavedRecipe},
        ports::RecipeService,
        value_objects::SaveRecipeInput,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveRecipeRequest {
    pub recipe: RecipeCandidate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveRecipeResponse {
    pub data: SavedRecipe,
    /// Totals for the day after this save
    pub totals: DailyNutritionTotal,
}

#[utoipa::path(
    post,
    path = "/saved",
    tag = "recipes",
    summary = "Save a cooked recipe",
    description = "Snapshots the recipe under today's date and recomputes the day's nutrition totals",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = SaveRecipeRequest,
    responses(
        (status = 201, body = SaveRecipeResponse)
    )
)]
pub async fn save_recipe(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<SaveRecipeRequest>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .save_recipe(SaveRecipeInput {
            user_id,
            recipe: request.recipe,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveRecipeResponse {
        data: outcome.saved,
        totals: outcome.totals,
    }))
}
