use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    profile::validators::UpdateProfileRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use demeter_core::domain::nutrition::{
    entities::{PersonalInfo, UserProfile, Weight},
    ports::ProfileService,
    value_objects::UpdateProfileInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "profile",
    summary = "Create or replace a user profile",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Invalid profile payload")
    )
)]
pub async fn update_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let profile = state
        .service
        .update_profile(UpdateProfileInput {
            user_id,
            personal_info: PersonalInfo {
                age: request.age,
                height_cm: request.height_cm,
                weight: Weight {
                    value: request.weight,
                    unit: request.weight_unit,
                },
                sex: request.sex,
            },
            conditions: request.conditions,
            dietary: request.dietary,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
