//! # Repository Errors

use thiserror::Error;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage failures
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No product with this id
    #[error("Product {0} not found")]
    NotFound(i64),

    /// The storage engine rejected an operation
    #[error("Storage error during {operation}: {cause}")]
    Storage { operation: String, cause: String },

    /// A lock guarding the store was poisoned
    #[error("Lock poisoned")]
    LockPoisoned,
}

impl RepositoryError {
    pub fn storage(operation: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Storage {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(e: rusqlite::Error) -> Self {
        Self::storage("sqlite", e)
    }
}
