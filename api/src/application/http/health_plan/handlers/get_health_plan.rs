use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::health_plan::{
    entities::HealthPlan,
    ports::HealthPlanService,
    value_objects::GetHealthPlanInput,
};

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetHealthPlanParams {
    /// Re-run the extraction pipeline even when a fresh plan is cached
    #[serde(default)]
    pub force_refresh: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthPlanResponse {
    pub data: HealthPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "health-plan",
    summary = "Get or derive the user's health plan",
    description = "Returns the cached include/exclude plan while it is fresh; otherwise runs OCR, fridge analysis and categorization",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        GetHealthPlanParams,
    ),
    responses(
        (status = 200, body = HealthPlanResponse),
        (status = 400, description = "No fridge image uploaded"),
        (status = 502, description = "An upstream extraction service failed")
    )
)]
pub async fn get_health_plan(
    Path(user_id): Path<Uuid>,
    Query(params): Query<GetHealthPlanParams>,
    State(state): State<AppState>,
) -> Result<Response<HealthPlanResponse>, ApiError> {
    let plan = state
        .service
        .get_health_plan(GetHealthPlanInput {
            user_id,
            force_refresh: params.force_refresh,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(HealthPlanResponse { data: plan }))
}
