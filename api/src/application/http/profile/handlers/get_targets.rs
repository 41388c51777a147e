use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::nutrition::{ports::ProfileService, value_objects::NutritionTargets};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetTargetsResponse {
    pub data: NutritionTargets,
}

#[utoipa::path(
    get,
    path = "/nutrition/targets",
    tag = "profile",
    summary = "Get daily nutrition targets",
    description = "Calorie, sodium and sugar targets derived from the stored profile",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetTargetsResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_targets(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetTargetsResponse>, ApiError> {
    let targets = state
        .service
        .get_targets(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTargetsResponse { data: targets }))
}
