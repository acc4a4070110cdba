pub mod entity;

pub use entity::{validate_new_product, NewProduct, Product};
