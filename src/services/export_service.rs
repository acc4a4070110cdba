// src/services/export_service.rs
//
// Export orchestration
//
// Fetches records, encodes them with the entity's column table and
// stages the blob as a file. Handing the file to the platform share
// sheet is the caller's job.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AppResult;
use crate::infrastructure::ExportWorkspace;
use crate::interchange::{encode_document, ANIME_COLUMNS, TRANSACTION_COLUMNS};
use crate::repositories::{AnimeRepository, TransactionRepository};

pub struct ExportService {
    anime_repo: Arc<dyn AnimeRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    workspace: Arc<ExportWorkspace>,
}

impl ExportService {
    pub fn new(
        anime_repo: Arc<dyn AnimeRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        workspace: Arc<ExportWorkspace>,
    ) -> Self {
        Self {
            anime_repo,
            transaction_repo,
            workspace,
        }
    }

    /// Encode the whole watch-list, oldest entry first
    pub fn export_animes_text(&self) -> AppResult<String> {
        let mut animes = self.anime_repo.list_all()?;
        animes.sort_by_key(|anime| anime.id);
        Ok(encode_document(&animes, ANIME_COLUMNS))
    }

    /// Encode the whole ledger, oldest entry first
    pub fn export_transactions_text(&self) -> AppResult<String> {
        let mut entries = self.transaction_repo.list_all()?;
        entries.sort_by_key(|entry| entry.id);
        Ok(encode_document(&entries, TRANSACTION_COLUMNS))
    }

    /// Stage the watch-list export as a dated file, ready to share
    pub fn export_animes_file(&self) -> AppResult<PathBuf> {
        let content = self.export_animes_text()?;
        let file_name = export_file_name("animes", Local::now().date_naive());
        self.workspace.write_text_file(&file_name, &content)
    }

    /// Stage the ledger export as a dated file, ready to share
    pub fn export_transactions_file(&self) -> AppResult<PathBuf> {
        let content = self.export_transactions_text()?;
        let file_name = export_file_name("transactions", Local::now().date_naive());
        self.workspace.write_text_file(&file_name, &content)
    }
}

/// `animes_17-06-2025.txt` style file name
fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.txt", prefix, date.format("%d-%m-%Y"))
}
