// src/interchange/transaction.rs
//
// Exchange format of the ledger:
//   Description;Box;Category;Quantity;Value;Type;Action;Date
// Box arrived with the later schema revision, so it stays optional on
// import; files without it load with no box label. Legacy files use
// the localized labels (Descrição, Caixa, Categoria, Quantidade,
// Valor, Tipo, Ação, Data) and localized enum cells.

use super::codec::Column;
use super::header::{FieldSpec, RowDecode, RowView};
use crate::domain::transaction::{
    format_wire_date, parse_wire_date, EntryAction, NewTransaction, Transaction, TransactionType,
};

pub const TRANSACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Description", &["Descrição"]),
    FieldSpec::optional("Box", &["Caixa"]),
    FieldSpec::required("Category", &["Categoria"]),
    FieldSpec::required("Quantity", &["Quantidade"]),
    FieldSpec::required("Value", &["Valor"]),
    FieldSpec::required("Type", &["Tipo"]),
    FieldSpec::required("Action", &["Ação"]),
    FieldSpec::required("Date", &["Data"]),
];

pub const TRANSACTION_COLUMNS: &[Column<Transaction>] = &[
    Column {
        label: "Description",
        value: |t| Some(t.description.clone()),
    },
    Column {
        label: "Box",
        value: |t| t.box_label.clone(),
    },
    Column {
        label: "Category",
        value: |t| Some(t.category.clone()),
    },
    Column {
        label: "Quantity",
        value: |t| Some(t.quantity.to_string()),
    },
    Column {
        label: "Value",
        value: |t| Some(t.unit_value.to_string()),
    },
    Column {
        label: "Type",
        value: |t| Some(t.transaction_type.to_string()),
    },
    Column {
        label: "Action",
        value: |t| Some(t.action.to_string()),
    },
    Column {
        label: "Date",
        value: |t| Some(format_wire_date(t.date)),
    },
];

impl RowDecode for NewTransaction {
    fn fields() -> &'static [FieldSpec] {
        TRANSACTION_FIELDS
    }

    fn decode(row: &RowView<'_>) -> Result<Self, String> {
        let description = row.get("Description").unwrap_or_default();
        if description.is_empty() {
            return Err("description cannot be empty".to_string());
        }

        let category = row.get("Category").unwrap_or_default();
        if category.is_empty() {
            return Err("category cannot be empty".to_string());
        }

        let raw_quantity = row.get("Quantity").unwrap_or_default();
        let quantity: i64 = raw_quantity
            .parse()
            .map_err(|_| format!("quantity is not a valid number: \"{}\"", raw_quantity))?;
        if quantity <= 0 {
            return Err(format!("quantity must be a positive integer: \"{}\"", raw_quantity));
        }

        let raw_value = row.get("Value").unwrap_or_default();
        let unit_value: i64 = raw_value
            .parse()
            .map_err(|_| format!("value is not a valid number: \"{}\"", raw_value))?;

        let raw_type = row.get("Type").unwrap_or_default();
        let transaction_type = TransactionType::parse_field(raw_type)
            .ok_or_else(|| format!("invalid value: \"{}\"", raw_type))?;

        let raw_action = row.get("Action").unwrap_or_default();
        let action = EntryAction::parse_field(raw_action)
            .ok_or_else(|| format!("invalid value: \"{}\"", raw_action))?;

        let raw_date = row.get("Date").unwrap_or_default();
        let date = parse_wire_date(raw_date)
            .ok_or_else(|| format!("invalid date: \"{}\"", raw_date))?;

        Ok(NewTransaction {
            description: description.to_string(),
            box_label: row.get_optional("Box").map(str::to_string),
            category: category.to_string(),
            quantity,
            unit_value,
            transaction_type,
            action,
            date,
        })
    }
}
