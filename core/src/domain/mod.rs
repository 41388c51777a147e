pub mod alerts;
pub mod common;
pub mod health;
pub mod health_plan;
pub mod nutrition;
pub mod nutrition_log;
pub mod recipes;
pub mod storage;
