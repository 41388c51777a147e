use super::handlers::{
    analyze_fridge::{__path_analyze_fridge, analyze_fridge},
    get_health_plan::{__path_get_health_plan, get_health_plan},
    process_ocr::{__path_process_ocr, process_ocr},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_health_plan, process_ocr, analyze_fridge))]
pub struct HealthPlanApiDoc;

pub fn health_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/users/{{user_id}}/health-plan",
                state.args.server.root_path
            ),
            post(get_health_plan),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/health-plan/ocr",
                state.args.server.root_path
            ),
            post(process_ocr),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/health-plan/fridge",
                state.args.server.root_path
            ),
            post(analyze_fridge),
        )
}
