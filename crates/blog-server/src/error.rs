//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use blog_core::ValidationError;
use blog_store::StoreError;
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Input failed validation (400).
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Unique key already taken (400).
    #[error("{0}")]
    Conflict(String),

    /// Referenced entity does not exist (400).
    #[error("{0}")]
    InvalidReference(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Service unavailable (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "EMAIL_TAKEN",
            Self::InvalidReference(_) => "INVALID_REFERENCE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Store(e) => match e {
                StoreError::DuplicateEmail(_) => "EMAIL_TAKEN",
                StoreError::InvalidAuthorReference(_) => "INVALID_REFERENCE",
                _ => "STORAGE_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::InvalidReference(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(e) => match e {
                StoreError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
                StoreError::InvalidAuthorReference(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message sent to the client.
    ///
    /// Constraint violations that slipped past a pre-check get the same
    /// wording as the pre-check itself. Other storage failures are reported
    /// without internal detail.
    fn client_message(&self) -> String {
        match self {
            Self::Store(StoreError::DuplicateEmail(_)) => EMAIL_TAKEN.to_string(),
            Self::Store(StoreError::InvalidAuthorReference(_)) => {
                AUTHOR_REFERENCE_MISSING.to_string()
            }
            Self::Store(_) => "storage error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Message for a create or update that reuses a registered email.
pub const EMAIL_TAKEN: &str = "Email already registered";

/// Message for a post that references a missing author.
pub const AUTHOR_REFERENCE_MISSING: &str = "Author ID does not exist";

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "EMAIL_TAKEN").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.client_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
