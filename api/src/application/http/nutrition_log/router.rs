use super::handlers::{
    get_daily_alert::{__path_get_daily_alert, get_daily_alert},
    get_daily_totals::{__path_get_daily_totals, get_daily_totals},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_daily_totals, get_daily_alert))]
pub struct NutritionLogApiDoc;

pub fn nutrition_log_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/users/{{user_id}}/nutrition/daily/{{date}}",
                state.args.server.root_path
            ),
            get(get_daily_totals),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/nutrition/alert",
                state.args.server.root_path
            ),
            get(get_daily_alert),
        )
}
