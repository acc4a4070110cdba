// src/repositories/transaction_repository.rs
//
// Ledger persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::transaction::{
    format_wire_date, parse_wire_date, EntryAction, NewTransaction, Transaction, TransactionType,
};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait TransactionRepository: Send + Sync {
    /// Insert a new entry and return its storage-assigned id
    fn create(&self, new: &NewTransaction) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Transaction>>;
    fn list_all(&self) -> AppResult<Vec<Transaction>>;
    /// Distinct category labels, for input suggestions
    fn list_categories(&self) -> AppResult<Vec<String>>;
    /// Distinct box labels, for input suggestions
    fn list_box_labels(&self) -> AppResult<Vec<String>>;
    fn update(&self, entry: &Transaction) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
    /// Drop and recreate the table, discarding every entry
    fn recreate_table(&self) -> AppResult<()>;
}

pub struct SqliteTransactionRepository {
    pool: Arc<ConnectionPool>,
}

// The date column is DD/MM/YYYY text, so chronological ordering has to
// be spelled out year-month-day over the substrings.
const ORDER_BY_DATE_DESC: &str =
    "ORDER BY substr(date, 7, 4) DESC, substr(date, 4, 2) DESC, substr(date, 1, 2) DESC, id DESC";

impl SqliteTransactionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Transaction - returns rusqlite::Error for query_map compatibility
    fn row_to_transaction(row: &Row) -> Result<Transaction, rusqlite::Error> {
        let id: i64 = row.get("id")?;
        let description: String = row.get("description")?;
        let box_label: Option<String> = row.get("box")?;
        let category: String = row.get("category")?;
        let quantity: i64 = row.get("quantity")?;
        let unit_value: i64 = row.get("unit_value")?;

        let type_str: String = row.get("transaction_type")?;
        let transaction_type =
            TransactionType::parse_field(&type_str).ok_or(rusqlite::Error::InvalidQuery)?;

        let action_str: String = row.get("action")?;
        let action = EntryAction::parse_field(&action_str).ok_or(rusqlite::Error::InvalidQuery)?;

        let date_str: String = row.get("date")?;
        let date = parse_wire_date(&date_str).ok_or(rusqlite::Error::InvalidQuery)?;

        Ok(Transaction {
            id,
            description,
            box_label,
            category,
            quantity,
            unit_value,
            transaction_type,
            action,
            date,
        })
    }
}

impl TransactionRepository for SqliteTransactionRepository {
    fn create(&self, new: &NewTransaction) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO transactions
                 (description, box, category, quantity, unit_value,
                  transaction_type, action, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                new.description,
                new.box_label,
                new.category,
                new.quantity,
                new.unit_value,
                new.transaction_type.to_string(),
                new.action.to_string(),
                format_wire_date(new.date),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Transaction>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, description, box, category, quantity, unit_value,
                    transaction_type, action, date
             FROM transactions WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_transaction) {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Transaction>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, description, box, category, quantity, unit_value,
                    transaction_type, action, date
             FROM transactions
             {}",
            ORDER_BY_DATE_DESC
        ))?;

        let entries: Vec<Transaction> = stmt
            .query_map([], Self::row_to_transaction)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn list_categories(&self) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT category FROM transactions ORDER BY category",
        )?;

        let labels: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(labels)
    }

    fn list_box_labels(&self) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT box FROM transactions WHERE box IS NOT NULL ORDER BY box",
        )?;

        let labels: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(labels)
    }

    fn update(&self, entry: &Transaction) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE transactions
             SET description = ?1, box = ?2, category = ?3, quantity = ?4,
                 unit_value = ?5, transaction_type = ?6, action = ?7, date = ?8
             WHERE id = ?9",
            params![
                entry.description,
                entry.box_label,
                entry.category,
                entry.quantity,
                entry.unit_value,
                entry.transaction_type.to_string(),
                entry.action.to_string(),
                format_wire_date(entry.date),
                entry.id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn recreate_table(&self) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute_batch(
            "DROP TABLE IF EXISTS transactions;
             CREATE TABLE transactions (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 description TEXT NOT NULL,
                 box TEXT,
                 category TEXT NOT NULL,
                 quantity INTEGER NOT NULL,
                 unit_value INTEGER NOT NULL,
                 transaction_type TEXT NOT NULL,
                 action TEXT NOT NULL,
                 date TEXT NOT NULL
             );
             CREATE INDEX idx_transactions_category ON transactions(category);
             CREATE INDEX idx_transactions_date ON transactions(date);",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use chrono::NaiveDate;

    fn repository() -> SqliteTransactionRepository {
        SqliteTransactionRepository::new(Arc::new(create_test_pool().unwrap()))
    }

    fn sample_new(description: &str, day: u32, month: u32) -> NewTransaction {
        NewTransaction {
            description: description.to_string(),
            box_label: Some("Household".to_string()),
            category: "Food".to_string(),
            quantity: 1,
            unit_value: 3500,
            transaction_type: TransactionType::Pix,
            action: EntryAction::Expense,
            date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
        }
    }

    #[test]
    fn test_round_trip_through_storage() {
        let repo = repository();
        let id = repo.create(&sample_new("Lunch", 10, 6)).unwrap();

        let stored = repo.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.description, "Lunch");
        assert_eq!(stored.box_label.as_deref(), Some("Household"));
        assert_eq!(stored.date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(stored.total(), 3500);
    }

    #[test]
    fn test_list_all_is_newest_first() {
        let repo = repository();
        repo.create(&sample_new("January", 15, 1)).unwrap();
        repo.create(&sample_new("March", 1, 3)).unwrap();
        repo.create(&sample_new("February", 5, 2)).unwrap();

        let descriptions: Vec<String> = repo
            .list_all()
            .unwrap()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(descriptions, vec!["March", "February", "January"]);
    }

    #[test]
    fn test_distinct_labels() {
        let repo = repository();
        let mut first = sample_new("A", 1, 1);
        first.category = "Food".to_string();
        let mut second = sample_new("B", 2, 1);
        second.category = "Rent".to_string();
        second.box_label = None;
        repo.create(&first).unwrap();
        repo.create(&second).unwrap();

        assert_eq!(repo.list_categories().unwrap(), vec!["Food", "Rent"]);
        assert_eq!(repo.list_box_labels().unwrap(), vec!["Household"]);
    }

    #[test]
    fn test_update_and_delete() {
        let repo = repository();
        let id = repo.create(&sample_new("Lunch", 10, 6)).unwrap();

        let mut stored = repo.get_by_id(id).unwrap().unwrap();
        stored.unit_value = 4200;
        stored.action = EntryAction::Income;
        repo.update(&stored).unwrap();

        let updated = repo.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.unit_value, 4200);
        assert_eq!(updated.action, EntryAction::Income);

        repo.delete(id).unwrap();
        assert!(matches!(repo.delete(id), Err(AppError::NotFound)));
    }

    #[test]
    fn test_recreate_table_discards_everything() {
        let repo = repository();
        repo.create(&sample_new("Lunch", 10, 6)).unwrap();

        repo.recreate_table().unwrap();
        assert!(repo.list_all().unwrap().is_empty());
    }
}
