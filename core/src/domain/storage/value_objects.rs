use bytes::Bytes;
use uuid::Uuid;

use crate::domain::storage::entities::ImageKind;

#[derive(Debug, Clone)]
pub struct UploadImageInput {
    pub user_id: Uuid,
    pub kind: ImageKind,
    pub content_type: String,
    pub payload: Bytes,
}
