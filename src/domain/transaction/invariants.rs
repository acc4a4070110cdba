use super::entity::{NewTransaction, Transaction};
use crate::domain::{DomainError, DomainResult};

/// Validates all Transaction invariants
pub fn validate_transaction(entry: &Transaction) -> DomainResult<()> {
    validate_fields(&entry.description, &entry.category, entry.quantity)
}

/// Same rules, for a not-yet-persisted payload
pub fn validate_new_transaction(new: &NewTransaction) -> DomainResult<()> {
    validate_fields(&new.description, &new.category, new.quantity)
}

fn validate_fields(description: &str, category: &str, quantity: i64) -> DomainResult<()> {
    if description.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Transaction description cannot be empty".to_string(),
        ));
    }
    if category.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Transaction category cannot be empty".to_string(),
        ));
    }
    if quantity <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Transaction quantity must be positive, got {}",
            quantity
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the ledger domain:
///
/// 1. Identity is storage-assigned and immutable
/// 2. Description and category cannot be empty
/// 3. Quantity is a positive integer
/// 4. Values are integer minor units; totals are derived, never stored
/// 5. Dates are real calendar days

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{EntryAction, TransactionType};
    use chrono::NaiveDate;

    fn sample_new() -> NewTransaction {
        NewTransaction {
            description: "Lunch".to_string(),
            box_label: None,
            category: "Food".to_string(),
            quantity: 1,
            unit_value: 3500,
            transaction_type: TransactionType::Cash,
            action: EntryAction::Expense,
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        }
    }

    #[test]
    fn test_valid_transaction() {
        assert!(validate_new_transaction(&sample_new()).is_ok());
    }

    #[test]
    fn test_empty_description_fails() {
        let mut new = sample_new();
        new.description = "".to_string();
        assert!(validate_new_transaction(&new).is_err());
    }

    #[test]
    fn test_zero_quantity_fails() {
        let mut new = sample_new();
        new.quantity = 0;
        assert!(validate_new_transaction(&new).is_err());
    }
}
