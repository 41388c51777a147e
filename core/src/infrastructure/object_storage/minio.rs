use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::{entities::ImageKind, ports::ObjectStoragePort},
};

#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    bucket_prefix: String,
}

impl MinioObjectStorage {
    pub async fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "demeter",
        );

        let endpoint = config.endpoint.trim_end_matches('/');

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            use_ssl = config.use_ssl,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        let client = Client::from_conf(s3_config);

        Self {
            client,
            bucket_prefix: config.bucket_prefix,
        }
    }
}

impl ObjectStoragePort for MinioObjectStorage {
    fn bucket_name(&self, kind: ImageKind) -> String {
        // Bucket names may not contain underscores.
        format!(
            "{}-{}",
            self.bucket_prefix,
            kind.as_str().replace('_', "-")
        )
    }

    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            size = payload_size,
            content_type = %content_type,
            "Uploading object to storage"
        );

        self.client
            .put_object()
            .bucket(bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorageError(format!("Failed to upload object: {}", e))
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_object(&self, bucket: &str, object_key: &str) -> Result<Bytes, CoreError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    "Failed to fetch object"
                );
                CoreError::ObjectStorageError(format!("Failed to fetch object: {}", e))
            })?;

        let data = output.body.collect().await.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %bucket,
                object_key = %object_key,
                "Failed to read object body"
            );
            CoreError::ObjectStorageError(format!("Failed to read object body: {}", e))
        })?;

        Ok(data.into_bytes())
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, bucket: &str, object_key: &str) -> Result<(), CoreError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    "Failed to delete object"
                );
                CoreError::ObjectStorageError(format!("Failed to delete object: {}", e))
            })?;

        Ok(())
    }
}
