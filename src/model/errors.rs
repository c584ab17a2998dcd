//! # Validation Errors
//!
//! Input shape errors raised before any storage call is made.

use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejected request input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name missing from the payload
    #[error("Product name is required")]
    MissingName,

    /// Name present but empty after trimming
    #[error("Product name must not be blank")]
    BlankName,

    /// Body id does not match the id in the path
    #[error("Body id {body} does not match path id {path}")]
    IdMismatch { path: i64, body: i64 },

    /// Search term missing or blank
    #[error("Search term must not be blank")]
    BlankSearchTerm,
}
