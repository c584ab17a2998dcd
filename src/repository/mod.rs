//! # Product Repository
//!
//! Key-based storage for products. The service layer only sees the
//! `ProductRepository` trait; the backend is chosen once at startup.

pub mod errors;
#[cfg(test)]
pub(crate) mod failing;
pub mod memory;
pub mod sqlite;

pub use errors::{RepositoryError, RepositoryResult};
pub use memory::InMemoryProductRepository;
pub use sqlite::SqliteProductRepository;

use crate::model::{Product, ProductRecord};

/// Storage operations the service layer relies on
pub trait ProductRepository: Send + Sync {
    /// Insert a new product or overwrite an existing one, returning the
    /// stored value with its id. Overwriting an id that is no longer stored
    /// fails with `NotFound`.
    fn save(&self, record: ProductRecord) -> RepositoryResult<Product>;

    /// Look up a product by id
    fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    /// All products, in id order
    fn find_all(&self) -> RepositoryResult<Vec<Product>>;

    /// Whether a product with this id is stored
    fn exists_by_id(&self, id: i64) -> RepositoryResult<bool>;

    /// Delete by id. Fails with `NotFound` if the id is absent.
    fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;

    /// Products whose name contains `fragment`, ignoring case
    fn find_by_name_containing_ignore_case(&self, fragment: &str)
        -> RepositoryResult<Vec<Product>>;

    /// All products sorted by quantity, smallest first
    fn find_all_order_by_quantity_asc(&self) -> RepositoryResult<Vec<Product>>;
}
