//! # SQLite Repository
//!
//! Stores products in a single `product` table. The table is created on
//! open if it does not exist; there is no migration support.
//!
//! Name search folds case with Rust's Unicode lowercasing through the
//! `fold_case` SQL function, so it agrees with the in-memory store. SQLite's
//! own `lower()` and `LIKE` only fold ASCII.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::{Product, ProductRecord};

use super::errors::{RepositoryError, RepositoryResult};
use super::ProductRepository;

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS product (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT    NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 0,
    price    REAL    NOT NULL DEFAULT 0
);
";

const COLUMNS: &str = "id, name, quantity, price";

/// SQL name of the Unicode lowercasing function registered on each connection
const FOLD_CASE_FN: &str = "fold_case";

/// SQLite-backed product storage
pub struct SqliteProductRepository {
    conn: Mutex<Connection>,
}

impl SqliteProductRepository {
    /// Open (or create) a database file
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| RepositoryError::storage("open_database", e))?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    pub fn in_memory() -> RepositoryResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| RepositoryError::storage("open_database_memory", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> RepositoryResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| RepositoryError::storage("initialize_schema", e))?;
        conn.create_scalar_function(
            FOLD_CASE_FN,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: String = ctx.get(0)?;
                Ok(text.to_lowercase())
            },
        )
        .map_err(|e| RepositoryError::storage("register_fold_case", e))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn query_list(
        &self,
        sql: &str,
        args: &[&dyn rusqlite::ToSql],
    ) -> RepositoryResult<Vec<Product>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(args, product_from_row)?;
        let products = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        price: row.get(3)?,
    })
}

impl ProductRepository for SqliteProductRepository {
    fn save(&self, record: ProductRecord) -> RepositoryResult<Product> {
        let conn = self.conn()?;
        match record {
            ProductRecord::New(new) => {
                conn.execute(
                    "INSERT INTO product (name, quantity, price) VALUES (?1, ?2, ?3)",
                    params![new.name, new.quantity, new.price],
                )
                .map_err(|e| RepositoryError::storage("insert_product", e))?;
                Ok(new.with_id(conn.last_insert_rowid()))
            }
            ProductRecord::Existing(product) => {
                let updated = conn
                    .execute(
                        "UPDATE product SET name = ?2, quantity = ?3, price = ?4 WHERE id = ?1",
                        params![product.id, product.name, product.quantity, product.price],
                    )
                    .map_err(|e| RepositoryError::storage("update_product", e))?;
                if updated == 0 {
                    return Err(RepositoryError::NotFound(product.id));
                }
                Ok(product)
            }
        }
    }

    fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let conn = self.conn()?;
        let product = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM product WHERE id = ?1"),
                params![id],
                product_from_row,
            )
            .optional()?;
        Ok(product)
    }

    fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        self.query_list(&format!("SELECT {COLUMNS} FROM product ORDER BY id"), &[])
    }

    fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let conn = self.conn()?;
        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM product WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let conn = self.conn()?;
        let deleted = conn
            .execute("DELETE FROM product WHERE id = ?1", params![id])
            .map_err(|e| RepositoryError::storage("delete_product", e))?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> RepositoryResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        self.query_list(
            &format!(
                "SELECT {COLUMNS} FROM product
                 WHERE instr({FOLD_CASE_FN}(name), ?1) > 0
                 ORDER BY id"
            ),
            &[&needle as &dyn rusqlite::ToSql],
        )
    }

    fn find_all_order_by_quantity_asc(&self) -> RepositoryResult<Vec<Product>> {
        self.query_list(
            &format!("SELECT {COLUMNS} FROM product ORDER BY quantity ASC, id ASC"),
            &[],
        )
    }
}
