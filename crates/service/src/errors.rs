use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn missing_fields() -> Self { Self::Validation("Missing required fields".into()) }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        common::metrics::STORAGE_ERRORS_TOTAL.inc();
        Self::Storage(err.to_string())
    }

    /// Human-readable reason without the variant prefix, suitable for a response body.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Conflict(m)
            | Self::NotFound(m)
            | Self::Unauthorized(m)
            | Self::Storage(m) => m,
        }
    }
}
