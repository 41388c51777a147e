use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        storage::entities::{ImageKind, StoredImage},
    },
    entity::stored_images,
};

impl TryFrom<&stored_images::Model> for StoredImage {
    type Error = CoreError;

    fn try_from(model: &stored_images::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            kind: ImageKind::try_from(model.kind.as_str())?,
            object_key: model.object_key.clone(),
            content_type: model.content_type.clone(),
            size_bytes: model.size_bytes,
            created_at: model.created_at.to_utc(),
        })
    }
}
