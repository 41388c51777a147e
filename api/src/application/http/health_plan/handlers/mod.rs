pub mod analyze_fridge;
pub mod get_health_plan;
pub mod process_ocr;
