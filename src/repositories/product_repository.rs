// src/repositories/product_repository.rs
//
// Product catalog persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::product::{NewProduct, Product};
use crate::error::{AppError, AppResult};

pub trait ProductRepository: Send + Sync {
    /// Insert a new item and return its storage-assigned id
    fn create(&self, new: &NewProduct) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Product>>;
    fn list_all(&self) -> AppResult<Vec<Product>>;
    fn update(&self, product: &Product) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
    /// Drop and recreate the table, discarding every item
    fn recreate_table(&self) -> AppResult<()>;
}

pub struct SqliteProductRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteProductRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &Row) -> Result<Product, rusqlite::Error> {
        Ok(Product {
            id: row.get("id")?,
            name: row.get("name")?,
            quantity: row.get("quantity")?,
            unit_value: row.get("unit_value")?,
        })
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create(&self, new: &NewProduct) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO products (name, quantity, unit_value) VALUES (?1, ?2, ?3)",
            params![new.name, new.quantity, new.unit_value],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, quantity, unit_value FROM products WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_product) {
            Ok(product) => Ok(Some(product)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Product>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, quantity, unit_value FROM products ORDER BY name",
        )?;

        let products: Vec<Product> = stmt
            .query_map([], Self::row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    fn update(&self, product: &Product) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE products SET name = ?1, quantity = ?2, unit_value = ?3 WHERE id = ?4",
            params![product.name, product.quantity, product.unit_value, product.id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn recreate_table(&self) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute_batch(
            "DROP TABLE IF EXISTS products;
             CREATE TABLE products (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 quantity INTEGER NOT NULL,
                 unit_value INTEGER NOT NULL
             );",
        )?;

        Ok(())
    }
}
