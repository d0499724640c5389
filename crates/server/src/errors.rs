use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Failure half of the response envelope: `{"success": false, "message": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a service error to its status. Storage failures are logged here and
    /// answered with the endpoint's generic `failure` message.
    pub fn from_service(err: ServiceError, failure: &str) -> Self {
        match err {
            ServiceError::Validation(msg) | ServiceError::Conflict(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ServiceError::Storage(msg) => {
                error!(error = %msg, "{failure}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
        }
    }

    /// Body could not be parsed as the expected JSON or form.
    pub fn invalid_body(err: impl Display) -> Self {
        warn!(error = %err, "rejected request body");
        Self::bad_request("Invalid request body")
    }

    pub fn invalid_query(err: impl Display) -> Self {
        warn!(error = %err, "rejected query string");
        Self::bad_request("Invalid query string")
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({"success": false, "message": self.message}));
        (self.status, body).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
