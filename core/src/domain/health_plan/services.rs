use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    health_plan::{
        entities::{FridgeScan, HealthPlan, OcrResult},
        ports::{HealthPlanRepository, HealthPlanService, LlmClient, OcrClient},
        prompts::{FRIDGE_SCANNER_PROMPT, build_categorization_prompt},
        schema::{get_categorization_schema, get_fridge_scan_schema},
        value_objects::{CategorizationPayload, FridgeScanPayload, GetHealthPlanInput},
    },
    nutrition::ports::UserProfileRepository,
    nutrition_log::ports::DailyTotalRepository,
    recipes::ports::{RecipeSearchClient, SavedRecipeRepository},
    storage::{
        entities::ImageKind,
        ports::{ObjectStoragePort, StoredImageRepository},
    },
};

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> HealthPlanService
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
    async fn get_health_plan(&self, input: GetHealthPlanInput) -> Result<HealthPlan, CoreError> {
        let now = Utc::now();

        // 1. Serve the cached plan while it is fresh
        if !input.force_refresh {
            if let Some(plan) = self
                .health_plan_repository
                .get_health_plan(input.user_id)
                .await?
            {
                if plan.is_fresh(now) {
                    return Ok(plan);
                }
            }
        }

        // 2. Ensure a usable OCR result
        let ocr = match self
            .health_plan_repository
            .get_ocr_result(input.user_id)
            .await?
        {
            Some(result) if !input.force_refresh && result.is_fresh(now) => result,
            _ => self.process_ocr(input.user_id).await?,
        };

        // 3. Ensure a usable fridge scan
        let scan = match self
            .health_plan_repository
            .get_fridge_scan(input.user_id)
            .await?
        {
            Some(scan) if !input.force_refresh && scan.is_fresh(now) => scan,
            _ => self.analyze_fridge(input.user_id).await?,
        };

        // 4. Categorize ingredients against the report
        let prompt = build_categorization_prompt(&ocr.full_text, &scan.ingredients);
        let raw = self
            .llm_client
            .generate_with_text(prompt, get_categorization_schema())
            .await?;

        let payload: CategorizationPayload = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse categorization response: {}", e);
            CoreError::ExternalServiceError(format!(
                "Failed to parse categorization response: {e}"
            ))
        })?;

        // 5. Replace the stored plan (last write wins)
        let plan = HealthPlan::new(input.user_id, payload);
        self.health_plan_repository.upsert_health_plan(plan).await
    }

    async fn process_ocr(&self, user_id: Uuid) -> Result<OcrResult, CoreError> {
        let extraction = self.ocr_client.extract_report(user_id).await?;

        let result = OcrResult::new(user_id, extraction.full_text, extraction.file_path);
        self.health_plan_repository.upsert_ocr_result(result).await
    }

    async fn analyze_fridge(&self, user_id: Uuid) -> Result<FridgeScan, CoreError> {
        let image = self
            .stored_image_repository
            .latest_by_user_and_kind(user_id, ImageKind::Fridge)
            .await?
            .ok_or(CoreError::NoFridgeImage)?;

        let bucket = self.object_storage.bucket_name(image.kind);
        let data = self
            .object_storage
            .get_object(&bucket, &image.object_key)
            .await?;

        let raw = self
            .llm_client
            .generate_with_image(
                FRIDGE_SCANNER_PROMPT.to_string(),
                data.to_vec(),
                image.content_type.clone(),
                get_fridge_scan_schema(),
            )
            .await?;

        let payload: FridgeScanPayload = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse fridge scan response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse fridge scan response: {e}"))
        })?;

        let scan = FridgeScan::new(user_id, payload.ingredients);
        self.health_plan_repository.upsert_fridge_scan(scan).await
    }
}
