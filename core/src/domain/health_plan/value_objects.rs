use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::health_plan::entities::HealthInsight;

#[derive(Debug, Clone, Copy)]
pub struct GetHealthPlanInput {
    pub user_id: Uuid,
    pub force_refresh: bool,
}

/// Raw response of the OCR extraction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrExtraction {
    pub full_text: String,
    pub file_path: String,
}

/// Raw response of the fridge vision call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeScanPayload {
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,
}

/// Raw response of the categorization call. Wire keys stay camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationPayload {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    #[serde(default)]
    pub health_insights: Vec<HealthInsight>,
    #[serde(default)]
    pub nutrition_tips: String,
    #[serde(default)]
    pub smart_shopping: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorization_payload_parses_camel_case_wire_format() {
        let raw = r#"{
            "include": ["spinach", "chicken breast"],
            "exclude": ["bacon"],
            "healthInsights": [{"title": "Sodium", "summary": "Your report shows elevated blood pressure."}],
            "nutritionTips": "Prefer fresh produce.",
            "smartShopping": "Check labels for hidden sodium."
        }"#;

        let payload: CategorizationPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.include.len(), 2);
        assert_eq!(payload.exclude, vec!["bacon".to_string()]);
        assert_eq!(payload.health_insights[0].title, "Sodium");
    }

    #[test]
    fn categorization_payload_tolerates_missing_optional_sections() {
        let raw = r#"{"include": [], "exclude": ["salt"]}"#;

        let payload: CategorizationPayload = serde_json::from_str(raw).unwrap();
        assert!(payload.include.is_empty());
        assert!(payload.health_insights.is_empty());
        assert!(payload.nutrition_tips.is_empty());
    }

    #[test]
    fn fridge_scan_payload_uses_capitalized_key() {
        let raw = r#"{"Ingredients": ["milk", "eggs"]}"#;

        let payload: FridgeScanPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.ingredients, vec!["milk", "eggs"]);
    }
}
