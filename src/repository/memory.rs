//! # In-Memory Repository
//!
//! A `BTreeMap` keyed by id behind an `RwLock`. Ids come from a counter that
//! starts at 1 and never hands out the same value twice, even after deletes.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::model::{Product, ProductRecord};

use super::errors::{RepositoryError, RepositoryResult};
use super::ProductRepository;

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory product storage
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> RepositoryResult<T> {
        let store = self.store.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(f(&store))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Store) -> T) -> RepositoryResult<T> {
        let mut store = self
            .store
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(f(&mut store))
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, record: ProductRecord) -> RepositoryResult<Product> {
        self.write(|store| match record {
            ProductRecord::New(new) => {
                store.last_id += 1;
                let product = new.with_id(store.last_id);
                store.products.insert(product.id, product.clone());
                Ok(product)
            }
            ProductRecord::Existing(product) => match store.products.get_mut(&product.id) {
                Some(stored) => {
                    *stored = product.clone();
                    Ok(product)
                }
                None => Err(RepositoryError::NotFound(product.id)),
            },
        })?
    }

    fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        self.read(|store| store.products.get(&id).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        self.read(|store| store.products.values().cloned().collect())
    }

    fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        self.read(|store| store.products.contains_key(&id))
    }

    fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.write(|store| store.products.remove(&id))?
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> RepositoryResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        self.read(|store| {
            store
                .products
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        })
    }

    fn find_all_order_by_quantity_asc(&self) -> RepositoryResult<Vec<Product>> {
        let mut products = self.find_all()?;
        // Stable sort keeps id order among equal quantities
        products.sort_by_key(|p| p.quantity);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;

    fn new_product(name: &str, quantity: i32) -> ProductRecord {
        ProductRecord::New(NewProduct {
            name: name.to_string(),
            quantity,
            price: 1.0,
        })
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo.save(new_product("A", 1)).unwrap();
        let b = repo.save(new_product("B", 2)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let a = repo.save(new_product("A", 1)).unwrap();
        repo.delete_by_id(a.id).unwrap();
        let b = repo.save(new_product("B", 1)).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_save_existing_replaces() {
        let repo = InMemoryProductRepository::new();
        let mut a = repo.save(new_product("A", 1)).unwrap();
        a.quantity = 42;
        repo.save(ProductRecord::Existing(a.clone())).unwrap();
        assert_eq!(repo.find_by_id(a.id).unwrap(), Some(a));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_of_deleted_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let a = repo.save(new_product("A", 1)).unwrap();
        repo.delete_by_id(a.id).unwrap();

        let result = repo.save(ProductRecord::Existing(a.clone()));
        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == a.id));
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_fails() {
        let repo = InMemoryProductRepository::new();
        assert!(matches!(
            repo.delete_by_id(5),
            Err(RepositoryError::NotFound(5))
        ));
    }

    #[test]
    fn test_exists() {
        let repo = InMemoryProductRepository::new();
        let a = repo.save(new_product("A", 1)).unwrap();
        assert!(repo.exists_by_id(a.id).unwrap());
        assert!(!repo.exists_by_id(a.id + 1).unwrap());
    }

    #[test]
    fn test_search_ignores_case() {
        let repo = InMemoryProductRepository::new();
        repo.save(new_product("Widget", 1)).unwrap();
        repo.save(new_product("Gadget", 1)).unwrap();

        for query in ["widget", "WIDGET", "idg"] {
            let found = repo.find_by_name_containing_ignore_case(query).unwrap();
            assert_eq!(found.len(), 1, "query {query}");
            assert_eq!(found[0].name, "Widget");
        }
        assert_eq!(
            repo.find_by_name_containing_ignore_case("dget").unwrap().len(),
            2
        );
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let repo = InMemoryProductRepository::new();
        repo.save(new_product("Éclair", 1)).unwrap();

        for query in ["Éclair", "éclair", "ÉCLAIR"] {
            let found = repo.find_by_name_containing_ignore_case(query).unwrap();
            assert_eq!(found.len(), 1, "query {query}");
        }
    }

    #[test]
    fn test_order_by_quantity() {
        let repo = InMemoryProductRepository::new();
        repo.save(new_product("A", 30)).unwrap();
        repo.save(new_product("B", -2)).unwrap();
        repo.save(new_product("C", 7)).unwrap();

        let quantities: Vec<i32> = repo
            .find_all_order_by_quantity_asc()
            .unwrap()
            .iter()
            .map(|p| p.quantity)
            .collect();
        assert_eq!(quantities, vec![-2, 7, 30]);
    }
}
