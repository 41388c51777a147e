use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_random_string, services::Service},
    health::ports::HealthCheckRepository,
    health_plan::ports::{HealthPlanRepository, LlmClient, OcrClient},
    nutrition::ports::UserProfileRepository,
    nutrition_log::ports::DailyTotalRepository,
    recipes::ports::{RecipeSearchClient, SavedRecipeRepository},
    storage::{
        entities::{ImageKind, StoredImage},
        ports::{ObjectStoragePort, StorageService, StoredImageRepository},
        value_objects::UploadImageInput,
    },
};

/// File extension for a handful of accepted image content types.
pub fn ext_from_mime(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        _ => None,
    }
}

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> StorageService
    for Service<U, HP, O, L, R, SR, DT, HC, OS, SI>
where
    U: UserProfileRepository,
    HP: HealthPlanRepository,
    O: OcrClient,
    L: LlmClient,
    R: RecipeSearchClient,
    SR: SavedRecipeRepository,
    DT: DailyTotalRepository,
    HC: HealthCheckRepository,
    OS: ObjectStoragePort,
    SI: StoredImageRepository,
{
    async fn upload_image(&self, input: UploadImageInput) -> Result<StoredImage, CoreError> {
        let ext = ext_from_mime(&input.content_type).ok_or_else(|| {
            CoreError::Invalid(format!(
                "unsupported image content type: {}",
                input.content_type
            ))
        })?;

        let object_key = format!(
            "{}/{}-{}.{}",
            input.user_id,
            input.kind.as_str(),
            generate_random_string(12),
            ext
        );

        let bucket = self.object_storage.bucket_name(input.kind);
        let size_bytes = input.payload.len() as i64;

        self.object_storage
            .put_object(&bucket, &object_key, input.payload, &input.content_type)
            .await?;

        let image = StoredImage::new(
            input.user_id,
            input.kind,
            object_key,
            input.content_type,
            size_bytes,
        );

        self.stored_image_repository.create(image).await
    }

    async fn latest_image(
        &self,
        user_id: Uuid,
        kind: ImageKind,
    ) -> Result<StoredImage, CoreError> {
        self.stored_image_repository
            .latest_by_user_and_kind(user_id, kind)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::ext_from_mime;

    #[test]
    fn known_image_types_map_to_extensions() {
        assert_eq!(ext_from_mime("image/jpeg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/jpg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/png"), Some("png"));
        assert_eq!(ext_from_mime("image/webp"), Some("webp"));
        assert_eq!(ext_from_mime("image/heic"), Some("heic"));
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert_eq!(ext_from_mime("application/octet-stream"), None);
        assert_eq!(ext_from_mime("text/plain"), None);
    }
}
