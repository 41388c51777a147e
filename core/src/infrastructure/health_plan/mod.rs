pub mod mappers;
pub mod repositories;

pub use repositories::health_plan_repository::PostgresHealthPlanRepository;
