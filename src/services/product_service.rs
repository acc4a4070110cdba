// src/services/product_service.rs
//
// Product catalog for the price accumulator. Besides plain CRUD, the
// catalog supports the name-list exchange format: one name per line
// with a trailing semicolon, merged on import without duplicating
// existing names.

use crate::domain::product::{validate_new_product, NewProduct, Product};
use crate::error::{AppError, AppResult};
use crate::repositories::ProductRepository;
use std::collections::HashSet;
use std::sync::Arc;

pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub fn create_product(&self, new: NewProduct) -> AppResult<i64> {
        validate_new_product(&new).map_err(AppError::Domain)?;
        self.product_repo.create(&new)
    }

    pub fn get_product(&self, product_id: i64) -> AppResult<Option<Product>> {
        self.product_repo.get_by_id(product_id)
    }

    pub fn list_products(&self) -> AppResult<Vec<Product>> {
        self.product_repo.list_all()
    }

    pub fn update_product(&self, product: &Product) -> AppResult<()> {
        self.product_repo.update(product)
    }

    pub fn delete_product(&self, product_id: i64) -> AppResult<()> {
        self.product_repo.delete(product_id)
    }

    /// Accumulated value of the whole catalog, in minor units
    pub fn catalog_total(&self) -> AppResult<i64> {
        let products = self.product_repo.list_all()?;
        Ok(products.iter().map(Product::total).sum())
    }

    /// Encode every product name in the name-list exchange format
    pub fn export_name_list(&self) -> AppResult<String> {
        let products = self.product_repo.list_all()?;
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        Ok(encode_name_list(&names))
    }

    /// Merge a name-list file into the catalog; returns how many new
    /// items were created. Names already present are left untouched.
    pub fn import_name_list(&self, content: &str) -> AppResult<u32> {
        let existing: HashSet<String> = self
            .product_repo
            .list_all()?
            .into_iter()
            .map(|p| p.name)
            .collect();

        let mut created = 0;
        let mut seen = existing;
        for name in parse_name_list(content) {
            if seen.contains(&name) {
                continue;
            }
            self.product_repo.create(&NewProduct {
                name: name.clone(),
                quantity: 0,
                unit_value: 0,
            })?;
            seen.insert(name);
            created += 1;
        }

        Ok(created)
    }

    /// Destructive: drops every item and recreates the table
    pub fn clear_all(&self) -> AppResult<()> {
        self.product_repo.recreate_table()
    }
}

/// Names joined by `;\n`, with a closing `;`
fn encode_name_list(names: &[&str]) -> String {
    if names.is_empty() {
        return String::new();
    }
    format!("{};", names.join(";\n"))
}

/// Split on `;`, trim, drop empties; order preserved
fn parse_name_list(content: &str) -> Vec<String> {
    content
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
