//! # Product Service
//!
//! Sits between the HTTP handlers and the repository. Storage failures are
//! logged here and replaced by a generic `ServiceError` so no storage detail
//! reaches a response.

pub mod errors;
pub mod product_service;

pub use errors::{ServiceError, ServiceResult};
pub use product_service::ProductService;
