pub mod health_plan_repository;
