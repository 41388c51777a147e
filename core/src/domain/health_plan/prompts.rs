/// Prompt for the fridge vision call. The model answers with the JSON shape
/// enforced by [`super::schema::get_fridge_scan_schema`].
pub const FRIDGE_SCANNER_PROMPT: &str = "\
You are looking at a photograph of the inside of a refrigerator or a pile of \
groceries. List every distinct food ingredient you can identify, using short \
common names (for example \"spinach\", \"cheddar cheese\", \"chicken breast\"). \
Ignore containers, brands and non-food items. Respond with JSON of the form \
{ \"Ingredients\": [\"...\"] }.";

/// Prompt template for the categorization call. `{medical_report}` and
/// `{ingredients}` are interpolated before sending.
pub const CATEGORIZATION_PROMPT: &str = "\
You are a clinical nutrition assistant. Below is the OCR text of a user's \
medical or lab report, followed by the list of ingredients currently in \
their fridge.

Medical report:
{medical_report}

Available ingredients:
{ingredients}

Split the available ingredients into an \"include\" list (safe and \
beneficial given the report) and an \"exclude\" list (should be avoided \
given the report). Every ingredient must appear in exactly one list. Also \
provide short health insights derived from the report, one practical \
nutrition tip, and one smart-shopping suggestion. Respond with JSON keys \
\"include\", \"exclude\", \"healthInsights\", \"nutritionTips\" and \
\"smartShopping\".";

pub fn build_categorization_prompt(medical_report: &str, ingredients: &[String]) -> String {
    let ingredients_json =
        serde_json::to_string(ingredients).unwrap_or_else(|_| "[]".to_string());

    CATEGORIZATION_PROMPT
        .replace("{medical_report}", medical_report)
        .replace("{ingredients}", &ingredients_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorization_prompt_interpolates_both_sections() {
        let prompt = build_categorization_prompt(
            "fasting glucose 130 mg/dL",
            &["spinach".to_string(), "bacon".to_string()],
        );

        assert!(prompt.contains("fasting glucose 130 mg/dL"));
        assert!(prompt.contains(r#"["spinach","bacon"]"#));
        assert!(!prompt.contains("{medical_report}"));
        assert!(!prompt.contains("{ingredients}"));
    }
}
