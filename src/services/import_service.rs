// src/services/import_service.rs
//
// Import orchestration
//
// Drives the whole pipeline for one uploaded file: split into lines,
// validate the header, then walk the data rows one at a time. Each row
// is tokenized, coerced and persisted individually; a bad row is
// recorded and the loop moves on. Only an empty file or a rejected
// header aborts the import. Rows are written strictly in file order,
// one create per row, so storage-assigned ids follow the file.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::anime::NewAnime;
use crate::domain::transaction::NewTransaction;
use crate::domain::{validate_new_anime, validate_new_transaction};
use crate::error::AppResult;
use crate::interchange::{tokenize_line, FormatError, HeaderIndex, RowDecode, RowView};
use crate::repositories::{AnimeRepository, TransactionRepository};

/// How many failure messages are surfaced to the user; the rest only
/// reach the diagnostic log
pub const ERROR_SAMPLE_LIMIT: usize = 5;

/// Preview length of the offending line inside a failure message
const PREVIEW_LIMIT: usize = 50;

/// One recoverable row failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    /// 1-based line number in the uploaded file (the header is line 1)
    pub line_number: usize,

    /// Truncated copy of the raw line
    pub preview: String,

    /// Short human-readable reason
    pub reason: String,
}

impl std::fmt::Display for RowFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line {}: \"{}...\" - {}",
            self.line_number, self.preview, self.reason
        )
    }
}

/// Final tally of one import run
///
/// A partially-successful import (some rows persisted, some failed) is
/// an expected outcome, not an error state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    pub imported: u32,
    pub failed: u32,

    /// At most [`ERROR_SAMPLE_LIMIT`] failures, in file order
    pub error_samples: Vec<RowFailure>,
}

impl ImportSummary {
    fn record_failure(&mut self, line_number: usize, raw_line: &str, reason: &str) {
        let failure = RowFailure {
            line_number,
            preview: raw_line.chars().take(PREVIEW_LIMIT).collect(),
            reason: reason.to_string(),
        };

        log::warn!("import row failed - {}", failure);

        self.failed += 1;
        if self.error_samples.len() < ERROR_SAMPLE_LIMIT {
            self.error_samples.push(failure);
        }
    }

    /// User-facing tally text
    pub fn message(&self) -> String {
        let mut message = format!("Imported: {}\nErrors: {}", self.imported, self.failed);
        if !self.error_samples.is_empty() {
            message.push_str("\n\nError details (first 5):");
            for failure in &self.error_samples {
                message.push_str(&format!("\n- {}", failure));
            }
            if self.failed as usize > self.error_samples.len() {
                message.push_str("\n... and more. See the log for the full list.");
            }
        }
        message
    }
}

/// Run one import: header validation up front, then a strictly
/// sequential row loop. `persist` is called once per valid row and its
/// failure counts like any other row failure.
fn run_import<T, F>(content: &str, mut persist: F) -> AppResult<ImportSummary>
where
    T: RowDecode,
    F: FnMut(T) -> AppResult<i64>,
{
    if content.trim().is_empty() {
        return Err(FormatError::EmptyFile.into());
    }

    let lines: Vec<&str> = content.split('\n').collect();

    let header = tokenize_line(lines[0]);
    let index = HeaderIndex::resolve(&header, T::fields())?;

    let mut summary = ImportSummary::default();

    for (i, line) in lines.iter().enumerate().skip(1) {
        // Blank lines are not rows
        if line.trim().is_empty() {
            continue;
        }
        let line_number = i + 1;

        let values = tokenize_line(line);
        if !index.covers(values.len()) {
            summary.record_failure(line_number, line, "missing fields or wrong column count");
            continue;
        }

        match T::decode(&RowView::new(&index, &values)) {
            Ok(payload) => match persist(payload) {
                Ok(_) => summary.imported += 1,
                Err(e) => summary.record_failure(line_number, line, &e.to_string()),
            },
            Err(reason) => summary.record_failure(line_number, line, &reason),
        }
    }

    log::info!(
        "import finished: {} imported, {} failed",
        summary.imported,
        summary.failed
    );

    Ok(summary)
}

pub struct ImportService {
    anime_repo: Arc<dyn AnimeRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
}

impl ImportService {
    pub fn new(
        anime_repo: Arc<dyn AnimeRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            anime_repo,
            transaction_repo,
        }
    }

    /// Import a watch-list file that the caller already read as text
    pub fn import_animes(&self, content: &str) -> AppResult<ImportSummary> {
        run_import(content, |new: NewAnime| {
            validate_new_anime(&new)?;
            self.anime_repo.create(&new)
        })
    }

    /// Import a ledger file that the caller already read as text
    pub fn import_transactions(&self, content: &str) -> AppResult<ImportSummary> {
        run_import(content, |new: NewTransaction| {
            validate_new_transaction(&new)?;
            self.transaction_repo.create(&new)
        })
    }
}
