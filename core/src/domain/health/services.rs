use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    health_plan::ports::{HealthPlanRepository, LlmClient, OcrClient},
    nutrition::ports::UserProfileRepository,
    nutrition_log::ports::DailyTotalRepository,
    recipes::ports::{RecipeSearchClient, SavedRecipeRepository},
    storage::ports::{ObjectStoragePort, StoredImageRepository},
};

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> HealthCheckService
    for Service<U, HP, O, L, R, SR, DT, HC, OS, SI>
where
    U: UserProfileRepository,
    HP: HealthPlanRepository,
    O: OcrClient,
    L: LlmClient,
    R: RecipeSearchClient,
    SR: SavedRecipeRepository,
    DT: DailyTotalRepository,
    HC: HealthCheckRepository,
    OS: ObjectStoragePort,
    SI: StoredImageRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
