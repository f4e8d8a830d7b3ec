use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid computation input: {0}")]
    Precondition(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}
