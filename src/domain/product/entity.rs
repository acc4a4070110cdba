use crate::domain::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// One catalog item of the price accumulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Storage-assigned immutable identifier
    pub id: i64,

    pub name: String,

    /// Accumulated unit count, never negative
    pub quantity: i64,

    /// Price per unit, in minor units
    pub unit_value: i64,
}

/// Payload for creating a product; the id is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub unit_value: i64,
}

impl Product {
    /// Accumulated total in minor units (derived, never stored)
    pub fn total(&self) -> i64 {
        self.quantity * self.unit_value
    }
}

pub fn validate_new_product(new: &NewProduct) -> DomainResult<()> {
    if new.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Product name cannot be empty".to_string(),
        ));
    }
    if new.quantity < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Product quantity cannot be negative, got {}",
            new.quantity
        )));
    }
    Ok(())
}
