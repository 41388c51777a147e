use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::storage::{
    entities::{ImageKind, StoredImage},
    ports::StorageService,
    value_objects::UploadImageInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadImageResponse {
    pub data: StoredImage,
}

#[utoipa::path(
    post,
    path = "",
    tag = "images",
    summary = "Upload a fridge or medical-report image",
    description = "Multipart upload with a `kind` field (fridge | medical_report) and an `image` field",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 201, body = UploadImageResponse),
        (status = 400, description = "Missing or invalid multipart fields")
    )
)]
pub async fn upload_image(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadImageResponse>, ApiError> {
    let mut kind: Option<ImageKind> = None;
    let mut payload: Option<(Bytes, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "kind" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read kind: {}", e)))?;
                kind = Some(
                    ImageKind::try_from(value.as_str())
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            }
            "image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                payload = Some((data, content_type));
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| ApiError::BadRequest("Missing kind field".to_string()))?;
    let (data, content_type) =
        payload.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let image = state
        .service
        .upload_image(UploadImageInput {
            user_id,
            kind,
            content_type,
            payload: data,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UploadImageResponse { data: image }))
}
