// src/lib.rs
// TrackHub - Local-first watch-list and ledger tracker
//
// Architecture:
// - Domain-centric: business rules live in domains
// - Explicit: no implicit behavior, no magic
// - Local-first: user controls all data
// - Interchange: one shared delimited-text pipeline for every entity

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interchange;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    format_currency,
    format_wire_date,
    parse_wire_date,
    validate_anime,
    validate_new_anime,
    validate_new_product,
    validate_new_transaction,
    validate_transaction,
    // Anime
    Anime,
    AnimeStatistics,
    CategorySummary,
    EntryAction,
    FlowTotals,
    MonthKey,
    MonthlyActivity,
    NewAnime,
    NewProduct,
    NewTransaction,
    // Product
    Product,
    ReleaseDay,
    // Transaction
    Transaction,
    TransactionType,
    WatchStatus,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Interchange (delimited-text pipeline)
// ============================================================================

pub use interchange::{
    encode_document,
    encode_line,
    escape_field,
    tokenize_line,
    Column,
    FieldSpec,
    FormatError,
    HeaderIndex,
    RowDecode,
    RowView,
    ANIME_COLUMNS,
    ANIME_FIELDS,
    TRANSACTION_COLUMNS,
    TRANSACTION_FIELDS,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_pool_at, create_test_pool, initialize_database, ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    AnimeRepository,
    ProductRepository,
    SqliteAnimeRepository,
    SqliteProductRepository,
    SqliteTransactionRepository,
    TransactionRepository,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::ExportWorkspace;

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    render_monthly_report,
    // Anime Service
    AnimeService,
    // Export Service
    ExportService,
    // Import Service
    ImportService,
    ImportSummary,
    // Product Service
    ProductService,
    // Report Service
    ReportService,
    RowFailure,
    // Summary Service
    SummaryService,
    // Transaction Service
    TransactionService,
    UpdateAnimeRequest,
    UpdateTransactionRequest,
    ERROR_SAMPLE_LIMIT,
};
