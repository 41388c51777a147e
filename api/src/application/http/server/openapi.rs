use crate::application::http::{
    file::router::FileApiDoc, health::HealthApiDoc, health_plan::router::HealthPlanApiDoc,
    nutrition_log::router::NutritionLogApiDoc, profile::router::ProfileApiDoc,
    recipes::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demeter API"
    ),
    nest(
        (path = "/users/{user_id}", api = ProfileApiDoc),
        (path = "/users/{user_id}/health-plan", api = HealthPlanApiDoc),
        (path = "/users/{user_id}/recipes", api = RecipeApiDoc),
        (path = "/users/{user_id}/nutrition", api = NutritionLogApiDoc),
        (path = "/users/{user_id}/images", api = FileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
