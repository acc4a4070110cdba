pub mod entity;
pub mod invariants;

pub use entity::{
    format_wire_date, parse_wire_date, EntryAction, NewTransaction, Transaction, TransactionType,
};
pub use invariants::{validate_new_transaction, validate_transaction};
