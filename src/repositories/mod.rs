// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod anime_repository;
pub mod product_repository;
pub mod transaction_repository;

pub use anime_repository::{AnimeRepository, SqliteAnimeRepository};
pub use product_repository::{ProductRepository, SqliteProductRepository};
pub use transaction_repository::{SqliteTransactionRepository, TransactionRepository};

#[cfg(test)]
pub use anime_repository::MockAnimeRepository;
#[cfg(test)]
pub use transaction_repository::MockTransactionRepository;
