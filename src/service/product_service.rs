//! Product service operations.

use std::sync::Arc;

use tracing::{debug, error};

use crate::model::{NewProduct, Product, ProductPayload, ProductRecord};
use crate::repository::{ProductRepository, RepositoryError};

use super::errors::{ServiceError, ServiceResult};

/// Mediates between the API layer and a `ProductRepository`
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new product and return it with its assigned id
    pub fn save_product(&self, product: NewProduct) -> ServiceResult<Product> {
        self.repository
            .save(ProductRecord::New(product))
            .map_err(|e| {
                error!(error = %e, "failed to save product");
                ServiceError::failed("Failed to save product")
            })
    }

    pub fn get_all_products(&self) -> ServiceResult<Vec<Product>> {
        self.repository.find_all().map_err(|e| {
            error!(error = %e, "failed to list products");
            ServiceError::failed("Failed to list products")
        })
    }

    pub fn get_product_by_id(&self, id: i64) -> ServiceResult<Option<Product>> {
        self.repository.find_by_id(id).map_err(|e| {
            error!(id, error = %e, "failed to fetch product");
            ServiceError::failed("Failed to fetch product")
        })
    }

    /// Merge `details` onto the stored product and persist the result.
    ///
    /// Returns `Ok(None)` when no product has this id, including when it is
    /// deleted before the merged value is written.
    pub fn update_product(
        &self,
        id: i64,
        details: &ProductPayload,
    ) -> ServiceResult<Option<Product>> {
        let Some(existing) = self.get_product_by_id(id)? else {
            return Ok(None);
        };

        let merged = existing.merged_with(details);
        match self.repository.save(ProductRecord::Existing(merged)) {
            Ok(product) => Ok(Some(product)),
            // Deleted between the read and the write
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => {
                error!(id, error = %e, "failed to update product");
                Err(ServiceError::failed("Failed to update product"))
            }
        }
    }

    /// Delete a product if it exists. Returns `false` when there was nothing
    /// to delete.
    pub fn delete_product(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.repository.exists_by_id(id).and_then(|exists| {
            if exists {
                self.repository.delete_by_id(id).map(|()| true)
            } else {
                Ok(false)
            }
        });

        deleted.map_err(|e| {
            error!(id, error = %e, "failed to delete product");
            ServiceError::failed("Failed to delete product")
        })
    }

    /// Whether the product exists. A storage failure reads as `false`.
    pub fn exists_by_id(&self, id: i64) -> bool {
        match self.repository.exists_by_id(id) {
            Ok(exists) => exists,
            Err(e) => {
                error!(id, error = %e, "failed to check product existence");
                false
            }
        }
    }

    pub fn find_by_name_containing(&self, name: &str) -> ServiceResult<Vec<Product>> {
        debug!(name, "searching products by name");
        self.repository
            .find_by_name_containing_ignore_case(name)
            .map_err(|e| {
                error!(name, error = %e, "failed to search products by name");
                ServiceError::failed("Failed to search products by name")
            })
    }

    pub fn get_products_ordered_by_quantity(&self) -> ServiceResult<Vec<Product>> {
        self.repository.find_all_order_by_quantity_asc().map_err(|e| {
            error!(error = %e, "failed to list products ordered by quantity");
            ServiceError::failed("Failed to list ordered products")
        })
    }
}

impl std::fmt::Debug for ProductService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductService").finish_non_exhaustive()
    }
}
