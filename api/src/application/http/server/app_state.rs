use std::sync::Arc;

use demeter_core::{
    application::DemeterService, infrastructure::health_plan::PostgresHealthPlanRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DemeterService,
    pub health_plan_repository: Arc<PostgresHealthPlanRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: DemeterService,
        health_plan_repository: PostgresHealthPlanRepository,
    ) -> Self {
        Self {
            args,
            service,
            health_plan_repository: Arc::new(health_plan_repository),
        }
    }
}
