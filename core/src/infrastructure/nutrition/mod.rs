pub mod mappers;
pub mod repositories;

pub use repositories::user_profile_repository::PostgresUserProfileRepository;
