use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::recipes::{entities::SavedRecipe, ports::RecipeService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetSavedRecipesResponse {
    pub data: Vec<SavedRecipe>,
}

#[utoipa::path(
    get,
    path = "/saved/{date}",
    tag = "recipes",
    summary = "List recipes saved on a date",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("date" = NaiveDate, Path, description = "Date key (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, body = GetSavedRecipesResponse)
    )
)]
pub async fn get_saved_recipes(
    Path((user_id, date)): Path<(Uuid, NaiveDate)>,
    State(state): State<AppState>,
) -> Result<Response<GetSavedRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_saved_recipes(user_id, date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedRecipesResponse { data: recipes }))
}
