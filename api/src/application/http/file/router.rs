use super::handlers::upload_image::{__path_upload_image, upload_image};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(upload_image))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/{{user_id}}/images", state.args.server.root_path),
            post(upload_image),
        )
        // Multipart bodies carry images; the axum default limit is too small.
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
}
