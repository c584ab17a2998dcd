//! # Observability
//!
//! Log setup for the inventory service. Events are emitted with `tracing`
//! throughout the crate; this module installs the subscriber.

pub mod logger;

pub use logger::{init_logging, LogFormat};
