// src/services/transaction_service.rs
use crate::domain::transaction::{
    validate_new_transaction, validate_transaction, NewTransaction, Transaction,
};
use crate::domain::{EntryAction, TransactionType};
use crate::error::{AppError, AppResult};
use crate::repositories::TransactionRepository;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UpdateTransactionRequest {
    pub transaction_id: i64,
    pub description: Option<String>,
    pub box_label: Option<Option<String>>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit_value: Option<i64>,
    pub transaction_type: Option<TransactionType>,
    pub action: Option<EntryAction>,
    pub date: Option<NaiveDate>,
}

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repo }
    }

    pub fn create_transaction(&self, new: NewTransaction) -> AppResult<i64> {
        validate_new_transaction(&new).map_err(AppError::Domain)?;
        self.transaction_repo.create(&new)
    }

    pub fn update_transaction(&self, request: UpdateTransactionRequest) -> AppResult<()> {
        let mut entry = self
            .transaction_repo
            .get_by_id(request.transaction_id)?
            .ok_or(AppError::NotFound)?;

        if let Some(description) = request.description {
            entry.description = description;
        }
        if let Some(box_label) = request.box_label {
            entry.box_label = box_label;
        }
        if let Some(category) = request.category {
            entry.category = category;
        }
        if let Some(quantity) = request.quantity {
            entry.quantity = quantity;
        }
        if let Some(unit_value) = request.unit_value {
            entry.unit_value = unit_value;
        }
        if let Some(transaction_type) = request.transaction_type {
            entry.transaction_type = transaction_type;
        }
        if let Some(action) = request.action {
            entry.action = action;
        }
        if let Some(date) = request.date {
            entry.date = date;
        }

        validate_transaction(&entry).map_err(AppError::Domain)?;
        self.transaction_repo.update(&entry)
    }

    pub fn get_transaction(&self, transaction_id: i64) -> AppResult<Option<Transaction>> {
        self.transaction_repo.get_by_id(transaction_id)
    }

    pub fn list_transactions(&self) -> AppResult<Vec<Transaction>> {
        self.transaction_repo.list_all()
    }

    /// Distinct category labels for input suggestions
    pub fn list_categories(&self) -> AppResult<Vec<String>> {
        self.transaction_repo.list_categories()
    }

    /// Distinct box labels for input suggestions
    pub fn list_box_labels(&self) -> AppResult<Vec<String>> {
        self.transaction_repo.list_box_labels()
    }

    pub fn delete_transaction(&self, transaction_id: i64) -> AppResult<()> {
        self.transaction_repo.delete(transaction_id)
    }

    /// Destructive: drops every entry and recreates the table
    pub fn clear_all(&self) -> AppResult<()> {
        self.transaction_repo.recreate_table()
    }
}
