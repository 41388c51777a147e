use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    get_targets::{__path_get_targets, get_targets},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(update_profile, get_profile, get_targets))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/users/{{user_id}}/profile",
                state.args.server.root_path
            ),
            put(update_profile).get(get_profile),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/nutrition/targets",
                state.args.server.root_path
            ),
            get(get_targets),
        )
}
