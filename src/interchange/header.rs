// src/interchange/header.rs
//
// Header validation and row access.
//
// The file's column order is free: each expected field is resolved to
// whatever index its label (or a legacy alias) occupies, and extra,
// unrecognized columns are ignored. A missing required label rejects
// the whole import before any row is touched.

use super::FormatError;

/// One expected field of an entity's exchange format
#[derive(Debug)]
pub struct FieldSpec {
    /// Canonical label; also what export writes
    pub name: &'static str,

    /// Additional header spellings accepted on import
    pub aliases: &'static [&'static str],

    /// Required fields must appear in the header; optional ones may be
    /// absent entirely (e.g. the ledger's Box column)
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, aliases: &'static [&'static str]) -> Self {
        FieldSpec {
            name,
            aliases,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, aliases: &'static [&'static str]) -> Self {
        FieldSpec {
            name,
            aliases,
            required: false,
        }
    }

    fn matches(&self, label: &str) -> bool {
        self.name == label || self.aliases.contains(&label)
    }
}

/// Resolution of an entity's field table against one file's header row
#[derive(Debug)]
pub struct HeaderIndex {
    specs: &'static [FieldSpec],
    slots: Vec<Option<usize>>,
}

impl HeaderIndex {
    /// Resolve every expected field to its column index
    ///
    /// Fails when any required label is missing, naming the full
    /// required field set in the error.
    pub fn resolve(
        header: &[String],
        specs: &'static [FieldSpec],
    ) -> Result<HeaderIndex, FormatError> {
        let mut slots = Vec::with_capacity(specs.len());
        let mut missing = false;

        for spec in specs {
            let position = header.iter().position(|label| spec.matches(label));
            if position.is_none() && spec.required {
                missing = true;
            }
            slots.push(position);
        }

        if missing {
            let required: Vec<&str> = specs
                .iter()
                .filter(|s| s.required)
                .map(|s| s.name)
                .collect();
            return Err(FormatError::MissingRequiredColumns(required.join(", ")));
        }

        Ok(HeaderIndex { specs, slots })
    }

    /// Structural precondition for one data row: every required column
    /// index must fall inside the row's field count
    pub fn covers(&self, field_count: usize) -> bool {
        self.specs
            .iter()
            .zip(&self.slots)
            .filter(|(spec, _)| spec.required)
            .all(|(_, slot)| matches!(slot, Some(index) if *index < field_count))
    }

    fn slot_of(&self, name: &str) -> Option<usize> {
        self.specs
            .iter()
            .position(|spec| spec.name == name)
            .and_then(|i| self.slots[i])
    }
}

/// One tokenized data row seen through the header resolution
pub struct RowView<'a> {
    index: &'a HeaderIndex,
    values: &'a [String],
}

impl<'a> RowView<'a> {
    pub fn new(index: &'a HeaderIndex, values: &'a [String]) -> Self {
        RowView { index, values }
    }

    /// Cell for a field, by canonical name
    ///
    /// `None` when the column is absent from the file or this row is
    /// short; required fields are guaranteed present once
    /// [`HeaderIndex::covers`] has passed.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.index
            .slot_of(name)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Cell coerced to an optional value: absent or empty becomes `None`
    pub fn get_optional(&self, name: &str) -> Option<&'a str> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// Table-driven import contract of one entity kind
///
/// The field table drives header validation; `decode` turns one row
/// into a create payload or a human-readable failure reason.
pub trait RowDecode: Sized {
    fn fields() -> &'static [FieldSpec];

    fn decode(row: &RowView<'_>) -> Result<Self, String>;
}
