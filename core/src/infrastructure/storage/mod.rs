pub mod mappers;
pub mod repositories;

pub use repositories::stored_image_repository::PostgresStoredImageRepository;
