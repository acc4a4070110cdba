use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One ledger entry
///
/// `unit_value` is in currency minor units (cents); the entry total is
/// `quantity * unit_value` and is derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Storage-assigned immutable identifier
    pub id: i64,

    pub description: String,

    /// Grouping label ("box") the entry belongs to; later schema revision
    pub box_label: Option<String>,

    pub category: String,

    /// Positive unit count
    pub quantity: i64,

    /// Price per unit, in minor units
    pub unit_value: i64,

    pub transaction_type: TransactionType,

    pub action: EntryAction,

    /// Stored and exchanged as `DD/MM/YYYY` text
    pub date: NaiveDate,
}

/// Payload for creating a transaction; the id is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub box_label: Option<String>,
    pub category: String,
    pub quantity: i64,
    pub unit_value: i64,
    pub transaction_type: TransactionType,
    pub action: EntryAction,
    pub date: NaiveDate,
}

/// Payment instrument of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionType {
    Pix,
    Cash,
    Invoice,
    Debit,
    Credit,
    WireTransferTed,
    WireTransferDoc,
    Other,
}

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAction {
    Income,
    Expense,
}

impl Transaction {
    /// Entry total in minor units (derived, never stored)
    pub fn total(&self) -> i64 {
        self.quantity * self.unit_value
    }
}

impl NewTransaction {
    pub fn total(&self) -> i64 {
        self.quantity * self.unit_value
    }
}

impl TransactionType {
    /// Parse an exchange-format cell
    ///
    /// Case-sensitive; accepts the canonical spelling and the legacy
    /// localized one.
    pub fn parse_field(raw: &str) -> Option<Self> {
        match raw {
            "PIX" => Some(TransactionType::Pix),
            "Cash" | "Dinheiro" => Some(TransactionType::Cash),
            "Invoice" | "Boleto" => Some(TransactionType::Invoice),
            "Debit" | "Débito" => Some(TransactionType::Debit),
            "Credit" | "Crédito" => Some(TransactionType::Credit),
            "WireTransferTED" | "TED" => Some(TransactionType::WireTransferTed),
            "WireTransferDOC" | "DOC" => Some(TransactionType::WireTransferDoc),
            "Other" | "Distinto" => Some(TransactionType::Other),
            _ => None,
        }
    }
}

impl EntryAction {
    /// Parse an exchange-format cell
    ///
    /// The legacy synonyms (`entrada`/`ganho`, `saida`/`gasto`) match
    /// case-insensitively; the canonical spellings match exactly.
    pub fn parse_field(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "entrada" | "ganho" => return Some(EntryAction::Income),
            "saida" | "gasto" => return Some(EntryAction::Expense),
            _ => {}
        }
        match raw {
            "income" => Some(EntryAction::Income),
            "expense" => Some(EntryAction::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransactionType::Pix => "PIX",
            TransactionType::Cash => "Cash",
            TransactionType::Invoice => "Invoice",
            TransactionType::Debit => "Debit",
            TransactionType::Credit => "Credit",
            TransactionType::WireTransferTed => "WireTransferTED",
            TransactionType::WireTransferDoc => "WireTransferDOC",
            TransactionType::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for EntryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryAction::Income => write!(f, "income"),
            EntryAction::Expense => write!(f, "expense"),
        }
    }
}

fn wire_date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("valid regex"))
}

/// Parse a `DD/MM/YYYY` date cell
///
/// Hyphens are normalized to slashes first, so `DD-MM-YYYY` is accepted.
/// Returns `None` when the shape is wrong or the day does not exist on
/// the calendar (e.g. `31/02/2024`).
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.replace('-', "/");
    let captures = wire_date_shape().captures(&normalized)?;

    // Captures are all-digit by construction
    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date in the `DD/MM/YYYY` exchange/storage format
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
