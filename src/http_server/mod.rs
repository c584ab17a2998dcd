//! # Inventory HTTP Server Module
//!
//! Exposes the product service over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/products` - Product CRUD, search, and ordered listing

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
