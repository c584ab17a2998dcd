//! inventory - a product inventory service with a CRUD HTTP API
//!
//! Layers, outermost first:
//! - `http_server`: routes, validation, status codes
//! - `service`: update merge and existence-guarded delete
//! - `repository`: SQLite or in-memory product storage

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod repository;
pub mod service;
