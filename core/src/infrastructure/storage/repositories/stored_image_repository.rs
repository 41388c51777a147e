use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        storage::{
            entities::{ImageKind, StoredImage},
            ports::StoredImageRepository,
        },
    },
    entity::stored_images::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresStoredImageRepository {
    pub db: DatabaseConnection,
}

impl PostgresStoredImageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StoredImageRepository for PostgresStoredImageRepository {
    async fn create(&self, image: StoredImage) -> Result<StoredImage, CoreError> {
        let active_model = ActiveModel {
            id: Set(image.id),
            user_id: Set(image.user_id),
            kind: Set(image.kind.as_str().to_string()),
            object_key: Set(image.object_key.clone()),
            content_type: Set(image.content_type.clone()),
            size_bytes: Set(image.size_bytes),
            created_at: Set(image.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create stored image record: {}", e);
                CoreError::InternalServerError
            })?;

        StoredImage::try_from(&created)
    }

    async fn latest_by_user_and_kind(
        &self,
        user_id: Uuid,
        kind: ImageKind,
    ) -> Result<Option<StoredImage>, CoreError> {
        let image = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Kind.eq(kind.as_str()))
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get latest stored image: {}", e);
                CoreError::InternalServerError
            })?;

        image.as_ref().map(StoredImage::try_from).transpose()
    }
}
