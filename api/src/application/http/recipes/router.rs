use super::handlers::{
    get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, save_recipe, get_saved_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/users/{{user_id}}/recipes/search",
                state.args.server.root_path
            ),
            post(search_recipes),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/recipes/saved",
                state.args.server.root_path
            ),
            post(save_recipe),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/recipes/saved/{{date}}",
                state.args.server.root_path
            ),
            get(get_saved_recipes),
        )
}
