use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health_plan::{
        entities::{FridgeScan, HealthPlan, OcrResult},
        value_objects::{GetHealthPlanInput, OcrExtraction},
    },
};

/// Client trait for the medical-report OCR extraction service
#[cfg_attr(test, mockall::automock)]
pub trait OcrClient: Send + Sync {
    fn extract_report(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<OcrExtraction, CoreError>> + Send;
}

/// LLM client trait for vision and text generation with structured output
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Repository trait for the per-user health-plan cache rows. Every write
/// replaces the previous row for that user.
#[cfg_attr(test, mockall::automock)]
pub trait HealthPlanRepository: Send + Sync {
    fn get_ocr_result(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<OcrResult>, CoreError>> + Send;

    fn upsert_ocr_result(
        &self,
        result: OcrResult,
    ) -> impl Future<Output = Result<OcrResult, CoreError>> + Send;

    fn get_fridge_scan(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<FridgeScan>, CoreError>> + Send;

    fn upsert_fridge_scan(
        &self,
        scan: FridgeScan,
    ) -> impl Future<Output = Result<FridgeScan, CoreError>> + Send;

    fn get_health_plan(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<HealthPlan>, CoreError>> + Send;

    fn upsert_health_plan(
        &self,
        plan: HealthPlan,
    ) -> impl Future<Output = Result<HealthPlan, CoreError>> + Send;
}

/// Service trait for the OCR -> fridge scan -> categorization pipeline
pub trait HealthPlanService: Send + Sync {
    fn get_health_plan(
        &self,
        input: GetHealthPlanInput,
    ) -> impl Future<Output = Result<HealthPlan, CoreError>> + Send;

    fn process_ocr(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<OcrResult, CoreError>> + Send;

    fn analyze_fridge(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<FridgeScan, CoreError>> + Send;
}
