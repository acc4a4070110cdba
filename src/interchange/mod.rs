// src/interchange/mod.rs
//
// Delimited-text exchange format
//
// One semicolon-delimited, double-quote-escaped text blob per entity
// kind: header row first, one record per line, `\n` terminated. The
// codec is pure; persistence and file handling live in the services.
//
// CRITICAL RULES:
// - Encoding never reorders or drops records
// - Escaping is invertible: tokenize(encode(fields)) == fields
// - Row coercion reports failures as data, not as errors

pub mod anime;
pub mod codec;
pub mod header;
pub mod transaction;

pub use codec::{encode_document, encode_line, escape_field, tokenize_line, Column, DELIMITER};
pub use header::{FieldSpec, HeaderIndex, RowDecode, RowView};

pub use anime::{ANIME_COLUMNS, ANIME_FIELDS};
pub use transaction::{TRANSACTION_COLUMNS, TRANSACTION_FIELDS};

use thiserror::Error;

/// Whole-file failures: the import aborts before any row is processed.
///
/// Row-level problems never show up here; they are collected in the
/// import summary and the loop continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("the file is empty")]
    EmptyFile,

    #[error("invalid file format; required columns: {0}")]
    MissingRequiredColumns(String),
}
