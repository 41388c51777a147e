use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::health_plan::{entities::OcrResult, ports::HealthPlanService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessOcrResponse {
    pub data: OcrResult,
}

#[utoipa::path(
    post,
    path = "/ocr",
    tag = "health-plan",
    summary = "Extract text from the latest medical report",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = ProcessOcrResponse),
        (status = 502, description = "OCR service failed")
    )
)]
pub async fn process_ocr(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ProcessOcrResponse>, ApiError> {
    let result = state
        .service
        .process_ocr(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProcessOcrResponse { data: result }))
}
