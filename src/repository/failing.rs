//! Repository double whose every call fails, used to drive error paths.

use crate::model::{Product, ProductRecord};

use super::errors::{RepositoryError, RepositoryResult};
use super::ProductRepository;

/// `exists_by_id` fails too unless `exists` is set.
#[derive(Default)]
pub(crate) struct FailingRepository {
    exists: Option<bool>,
}

impl FailingRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer existence checks with `exists`; everything else still fails
    pub(crate) fn reporting_exists(exists: bool) -> Self {
        Self {
            exists: Some(exists),
        }
    }
}

fn disk_full<T>(operation: &str) -> RepositoryResult<T> {
    Err(RepositoryError::storage(operation, "disk full"))
}

impl ProductRepository for FailingRepository {
    fn save(&self, _record: ProductRecord) -> RepositoryResult<Product> {
        disk_full("save")
    }

    fn find_by_id(&self, _id: i64) -> RepositoryResult<Option<Product>> {
        disk_full("find_by_id")
    }

    fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        disk_full("find_all")
    }

    fn exists_by_id(&self, _id: i64) -> RepositoryResult<bool> {
        self.exists.ok_or(RepositoryError::LockPoisoned)
    }

    fn delete_by_id(&self, _id: i64) -> RepositoryResult<()> {
        disk_full("delete_by_id")
    }

    fn find_by_name_containing_ignore_case(
        &self,
        _fragment: &str,
    ) -> RepositoryResult<Vec<Product>> {
        disk_full("find_by_name")
    }

    fn find_all_order_by_quantity_asc(&self) -> RepositoryResult<Vec<Product>> {
        disk_full("find_ordered")
    }
}
