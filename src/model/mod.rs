//! # Product Model
//!
//! The single entity managed by the inventory service, plus the wire
//! payload accepted on create and update.

pub mod errors;
pub mod product;

pub use errors::{ValidationError, ValidationResult};
pub use product::{NewProduct, Product, ProductPayload, ProductRecord};
