use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::nutrition::{entities::UserProfile, ports::ProfileService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Get a user profile",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
