//! SQLite Persistence Tests
//!
//! Data written through the service survives reopening the database file,
//! and ids keep increasing across restarts.

use std::sync::Arc;

use tempfile::TempDir;

use inventory::model::{NewProduct, ProductPayload};
use inventory::repository::{ProductRepository, SqliteProductRepository};
use inventory::service::ProductService;

fn open(tmp: &TempDir) -> ProductService {
    let repository = SqliteProductRepository::open(tmp.path().join("inventory.db")).unwrap();
    ProductService::new(Arc::new(repository))
}

fn new_product(name: &str, quantity: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        quantity,
        price: 1.25,
    }
}

#[test]
fn test_products_survive_reopen() {
    let tmp = TempDir::new().unwrap();

    let id = {
        let service = open(&tmp);
        let pen = service.save_product(new_product("Pen", 10)).unwrap();
        let payload = ProductPayload {
            quantity: 4,
            price: 2.0,
            ..Default::default()
        };
        service.update_product(pen.id, &payload).unwrap();
        pen.id
    };

    let service = open(&tmp);
    let pen = service.get_product_by_id(id).unwrap().unwrap();
    assert_eq!(pen.name, "Pen");
    assert_eq!(pen.quantity, 4);
    assert_eq!(pen.price, 2.0);
}

#[test]
fn test_ids_not_reused_after_reopen() {
    let tmp = TempDir::new().unwrap();

    let first = {
        let service = open(&tmp);
        let pen = service.save_product(new_product("Pen", 1)).unwrap();
        assert!(service.delete_product(pen.id).unwrap());
        pen.id
    };

    let service = open(&tmp);
    let ink = service.save_product(new_product("Ink", 1)).unwrap();
    assert!(ink.id > first);
}

#[test]
fn test_schema_creation_is_repeatable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("inventory.db");

    SqliteProductRepository::open(&path).unwrap();
    let repository = SqliteProductRepository::open(&path).unwrap();
    assert!(repository.find_all().unwrap().is_empty());
}
