use crate::domain::common::{DemeterConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    health_plan::PostgresHealthPlanRepository,
    llm::GeminiLlmClient,
    nutrition::PostgresUserProfileRepository,
    nutrition_log::PostgresDailyTotalRepository,
    object_storage::MinioObjectStorage,
    ocr::HttpOcrClient,
    recipes::{PostgresSavedRecipeRepository, SpoonacularClient},
    storage::PostgresStoredImageRepository,
};

/// The service wired with the default production adapters.
pub type DemeterService = Service<
    PostgresUserProfileRepository,
    PostgresHealthPlanRepository,
    HttpOcrClient,
    GeminiLlmClient,
    SpoonacularClient,
    PostgresSavedRecipeRepository,
    PostgresDailyTotalRepository,
    PostgresHealthCheckRepository,
    MinioObjectStorage,
    PostgresStoredImageRepository,
>;

pub async fn create_service(config: DemeterConfig) -> Result<DemeterService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    let object_storage = MinioObjectStorage::new(config.object_storage.clone()).await;

    Ok(Service::new(
        PostgresUserProfileRepository::new(db.clone()),
        PostgresHealthPlanRepository::new(db.clone()),
        HttpOcrClient::new(config.ocr.clone()),
        GeminiLlmClient::new(config.llm.clone()),
        SpoonacularClient::new(config.recipes.clone()),
        PostgresSavedRecipeRepository::new(db.clone()),
        PostgresDailyTotalRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db.clone()),
        object_storage,
        PostgresStoredImageRepository::new(db),
    ))
}
