pub mod mappers;
pub mod repositories;

pub use repositories::daily_total_repository::PostgresDailyTotalRepository;
