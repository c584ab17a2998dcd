//! # Service Errors

use thiserror::Error;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Generic failure surfaced to the API layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The operation failed in storage. Only a fixed description is kept.
    #[error("{operation}")]
    OperationFailed { operation: &'static str },
}

impl ServiceError {
    pub fn failed(operation: &'static str) -> Self {
        Self::OperationFailed { operation }
    }
}
