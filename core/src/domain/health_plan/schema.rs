use serde_json::json;

/// Returns the JSON schema for fridge-scan LLM responses
pub fn get_fridge_scan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "Ingredients": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["Ingredients"]
    })
}

/// Returns the JSON schema for ingredient-categorization LLM responses
pub fn get_categorization_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "include": {
                "type": "array",
                "items": { "type": "string" }
            },
            "exclude": {
                "type": "array",
                "items": { "type": "string" }
            },
            "healthInsights": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "summary": { "type": "string" }
                    },
                    "required": ["title", "summary"]
                }
            },
            "nutritionTips": { "type": "string" },
            "smartShopping": { "type": "string" }
        },
        "required": ["include", "exclude"]
    })
}
