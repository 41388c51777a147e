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
    health_plan::ports::HealthPlanRepository,
    recipes::{
        entities::RecipeCandidate,
        ports::RecipeService,
        services::DEFAULT_SEARCH_RESULTS,
        value_objects::FindRecipesInput,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchRecipesRequest {
    /// Defaults to the include list of the stored health plan
    pub include_ingredients: Option<Vec<String>>,
    /// Defaults to the exclude list of the stored health plan
    pub exclude_ingredients: Option<Vec<String>>,
    pub number: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchRecipesResponse {
    pub data: Vec<RecipeCandidate>,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "recipes",
    summary = "Find recipes for the user's ingredients",
    description = "Searches by include ingredients, bulk-fetches detail and drops recipes containing excluded ingredients",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = SearchRecipesRequest,
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 400, description = "No include ingredients available"),
        (status = 404, description = "No stored health plan to take ingredient lists from"),
        (status = 502, description = "Recipe API failed")
    )
)]
pub async fn search_recipes(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<SearchRecipesRequest>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let number = request.number.unwrap_or(DEFAULT_SEARCH_RESULTS);

    let (include, exclude) = match (request.include_ingredients, request.exclude_ingredients) {
        (Some(include), Some(exclude)) => (include, exclude),
        (include, exclude) => {
            let plan = state
                .health_plan_repository
                .get_health_plan(user_id)
                .await
                .map_err(ApiError::from)?
                .ok_or_else(|| {
                    ApiError::NotFound(
                        "No health plan found. Complete the health plan setup first.".to_string(),
                    )
                })?;

            (
                include.unwrap_or(plan.include),
                exclude.unwrap_or(plan.exclude),
            )
        }
    };

    let recipes = state
        .service
        .find_recipes(FindRecipesInput {
            include,
            exclude,
            number,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse { data: recipes }))
}
