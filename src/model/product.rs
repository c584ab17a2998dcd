//! # Product
//!
//! `Product` is the stored entity. `ProductPayload` is what clients send:
//! every field is optional on the wire, and `quantity`/`price` fall back to
//! zero when omitted.

use serde::{Deserialize, Serialize};

use super::errors::{ValidationError, ValidationResult};

/// A stored product. The id is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// A product that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// What a repository `save` accepts: a new product (no id) or a full
/// replacement of an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductRecord {
    New(NewProduct),
    Existing(Product),
}

/// Request body for create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub quantity: i32,

    #[serde(default)]
    pub price: f64,
}

impl ProductPayload {
    /// Return the name if it is present and not blank.
    ///
    /// The name is returned as sent; trimming is only used for the check.
    pub fn validated_name(&self) -> ValidationResult<&str> {
        match self.name.as_deref() {
            None => Err(ValidationError::MissingName),
            Some(name) if name.trim().is_empty() => Err(ValidationError::BlankName),
            Some(name) => Ok(name),
        }
    }

    /// Reject a body id that disagrees with the path id. A missing body id
    /// is accepted.
    pub fn check_id(&self, path_id: i64) -> ValidationResult<()> {
        match self.id {
            Some(body) if body != path_id => Err(ValidationError::IdMismatch {
                path: path_id,
                body,
            }),
            _ => Ok(()),
        }
    }

    /// Build an unsaved product. Any client-supplied id is dropped.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name.unwrap_or_default(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl Product {
    /// Merge an update payload onto this product, returning the new value.
    ///
    /// `name` is replaced only when the payload carries one. `quantity` and
    /// `price` are always taken from the payload, so an omitted field
    /// becomes zero.
    pub fn merged_with(&self, payload: &ProductPayload) -> Product {
        Product {
            id: self.id,
            name: payload.name.clone().unwrap_or_else(|| self.name.clone()),
            quantity: payload.quantity,
            price: payload.price,
        }
    }
}

impl NewProduct {
    /// Attach a repository-assigned id
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
