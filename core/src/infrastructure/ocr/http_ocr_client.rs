use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    common::{OcrConfig, entities::app_errors::CoreError},
    health_plan::{ports::OcrClient, value_objects::OcrExtraction},
};

/// Client for the OCR sidecar service. The sidecar keeps track of each
/// user's most recent medical-report upload and runs text extraction on it.
#[derive(Debug, Clone)]
pub struct HttpOcrClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct OcrRequest {
    uid: Uuid,
}

impl HttpOcrClient {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl OcrClient for HttpOcrClient {
    async fn extract_report(&self, user_id: Uuid) -> Result<OcrExtraction, CoreError> {
        let url = format!("{}/api/process-ocr", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&OcrRequest { uid: user_id })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OCR service request failed: {}", e);
                CoreError::ExternalServiceError(format!("OCR service error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OCR service error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "OCR service returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<OcrExtraction>().await.map_err(|e| {
            tracing::error!("Failed to parse OCR response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse OCR response: {}", e))
        })
    }
}
