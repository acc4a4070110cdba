// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod anime_service;
pub mod export_service;
pub mod import_service;
pub mod product_service;
pub mod report_service;
pub mod summary_service;
pub mod transaction_service;

#[cfg(test)]
mod import_service_tests;

// Re-export all services and their types
pub use anime_service::{AnimeService, UpdateAnimeRequest};

pub use transaction_service::{TransactionService, UpdateTransactionRequest};

pub use product_service::ProductService;

pub use import_service::{ImportService, ImportSummary, RowFailure, ERROR_SAMPLE_LIMIT};

pub use export_service::ExportService;

pub use summary_service::SummaryService;

pub use report_service::{render_monthly_report, ReportService};
