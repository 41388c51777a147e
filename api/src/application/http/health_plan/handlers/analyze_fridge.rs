use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::health_plan::{entities::FridgeScan, ports::HealthPlanService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFridgeResponse {
    pub data: FridgeScan,
}

#[utoipa::path(
    post,
    path = "/fridge",
    tag = "health-plan",
    summary = "Recognize ingredients in the latest fridge image",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = AnalyzeFridgeResponse),
        (status = 400, description = "No fridge image uploaded"),
        (status = 502, description = "Vision service failed")
    )
)]
pub async fn analyze_fridge(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AnalyzeFridgeResponse>, ApiError> {
    let scan = state
        .service
        .analyze_fridge(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFridgeResponse { data: scan }))
}
