//! # HTTP Errors
//!
//! Maps handler failures to status codes. Bodies never carry internal
//! detail: most errors answer with an empty body, and delete answers with
//! a fixed message.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::model::ValidationError;
use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Fixed body returned when a delete fails
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete product";

/// HTTP handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request input failed validation
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Body could not be read as a product
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Path segment is not a valid product id
    #[error("Malformed product id: {0}")]
    MalformedPath(#[from] PathRejection),

    /// Query string could not be read
    #[error("Malformed query string: {0}")]
    MalformedQuery(#[from] QueryRejection),

    /// No product with the requested id
    #[error("Product not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// A service operation failed
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Delete did not go through
    #[error("Failed to delete product")]
    DeleteFailed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedPath(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::DeleteFailed => (status, DELETE_FAILED_MESSAGE).into_response(),
            _ => status.into_response(),
        }
    }
}
