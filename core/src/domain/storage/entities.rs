use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Fridge,
    MedicalReport,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Fridge => "fridge",
            ImageKind::MedicalReport => "medical_report",
        }
    }
}

impl TryFrom<&str> for ImageKind {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "fridge" => Ok(ImageKind::Fridge),
            "medical_report" => Ok(ImageKind::MedicalReport),
            other => Err(CoreError::Invalid(format!("unknown image kind: {other}"))),
        }
    }
}

/// Metadata row for an uploaded image; the payload lives in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredImage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ImageKind,
    pub object_key: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

impl StoredImage {
    pub fn new(
        user_id: Uuid,
        kind: ImageKind,
        object_key: String,
        content_type: String,
        size_bytes: i64,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            kind,
            object_key,
            content_type,
            size_bytes,
            created_at: now,
        }
    }
}
