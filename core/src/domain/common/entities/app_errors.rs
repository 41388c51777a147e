use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("user profile not found")]
    ProfileNotFound,

    #[error("no include ingredients provided")]
    NoIngredients,

    #[error("no fridge image uploaded for this user")]
    NoFridgeImage,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("object storage error: {0}")]
    ObjectStorageError(String),

    #[error("internal server error")]
    InternalServerError,
}
