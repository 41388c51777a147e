use std::future::Future;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{
        entities::{ImageKind, StoredImage},
        value_objects::UploadImageInput,
    },
};

/// Port for object storage operations (MinIO/S3)
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Bucket holding objects of the given kind
    fn bucket_name(&self, kind: ImageKind) -> String;

    fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_object(
        &self,
        bucket: &str,
        object_key: &str,
    ) -> impl Future<Output = Result<Bytes, CoreError>> + Send;

    fn delete_object(
        &self,
        bucket: &str,
        object_key: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository for uploaded-image metadata
#[cfg_attr(test, mockall::automock)]
pub trait StoredImageRepository: Send + Sync {
    fn create(
        &self,
        image: StoredImage,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    fn latest_by_user_and_kind(
        &self,
        user_id: Uuid,
        kind: ImageKind,
    ) -> impl Future<Output = Result<Option<StoredImage>, CoreError>> + Send;
}

/// Service trait for image uploads
pub trait StorageService: Send + Sync {
    fn upload_image(
        &self,
        input: UploadImageInput,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    fn latest_image(
        &self,
        user_id: Uuid,
        kind: ImageKind,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;
}
