// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod anime;
pub mod product;
pub mod summary;
pub mod transaction;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Anime Domain
pub use anime::{validate_anime, validate_new_anime, Anime, NewAnime, ReleaseDay, WatchStatus};

// Transaction Domain
pub use transaction::{
    format_wire_date, parse_wire_date, validate_new_transaction, validate_transaction,
    EntryAction, NewTransaction, Transaction, TransactionType,
};

// Product Domain
pub use product::{validate_new_product, NewProduct, Product};

// Summary Domain (Derived Data)
pub use summary::{
    format_currency, AnimeStatistics, CategorySummary, FlowTotals, MonthKey, MonthlyActivity,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
