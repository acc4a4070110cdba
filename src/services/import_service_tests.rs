// src/services/import_service_tests.rs
//
// IMPORT ORCHESTRATOR TESTS
//
// PURPOSE:
// - Prove a rejected header persists nothing
// - Prove the row loop survives bad rows and keeps counting
// - Prove persistence failures are reported like validation failures
// - Pin the legacy-file scenario the format exists to support

use std::sync::Arc;

use crate::db::create_test_pool;
use crate::domain::anime::{ReleaseDay, WatchStatus};
use crate::error::AppError;
use crate::interchange::FormatError;
use crate::repositories::{
    AnimeRepository, MockTransactionRepository, SqliteAnimeRepository,
    SqliteTransactionRepository, TransactionRepository,
};
use crate::services::import_service::{ImportService, ERROR_SAMPLE_LIMIT};

fn sqlite_service() -> (ImportService, Arc<SqliteAnimeRepository>, Arc<SqliteTransactionRepository>) {
    let pool = Arc::new(create_test_pool().unwrap());
    let anime_repo = Arc::new(SqliteAnimeRepository::new(pool.clone()));
    let transaction_repo = Arc::new(SqliteTransactionRepository::new(pool));
    let service = ImportService::new(anime_repo.clone(), transaction_repo.clone());
    (service, anime_repo, transaction_repo)
}

#[test]
fn test_legacy_anime_file_imports() {
    let (service, anime_repo, _) = sqlite_service();

    let content = "Nome;Status;Lançamento;Observação;Link;Temporadas\nNaruto;assistindo;segunda;;;[220]";
    let summary = service.import_animes(content).unwrap();

    assert_eq!(summary.imported, 1);
    assert_eq!(summary.failed, 0);

    let animes = anime_repo.list_all().unwrap();
    assert_eq!(animes.len(), 1);
    let naruto = &animes[0];
    assert_eq!(naruto.name, "Naruto");
    assert_eq!(naruto.status, WatchStatus::Watching);
    assert_eq!(naruto.release_day, Some(ReleaseDay::Monday));
    assert_eq!(naruto.note, None);
    assert_eq!(naruto.link, None);
    assert_eq!(naruto.episode_counts, vec![220]);
}

#[test]
fn test_header_rejection_persists_nothing() {
    let (service, anime_repo, _) = sqlite_service();

    // Header lacks the season column entirely
    let content = "Nome;Status;Lançamento;Observação;Link\nNaruto;assistindo;segunda;;";
    let err = service.import_animes(content).unwrap_err();

    assert!(matches!(
        err,
        AppError::Format(FormatError::MissingRequiredColumns(_))
    ));
    assert!(anime_repo.list_all().unwrap().is_empty());
}

#[test]
fn test_empty_file_is_a_whole_import_failure() {
    let (service, _, _) = sqlite_service();
    let err = service.import_animes("  \n \n").unwrap_err();
    assert!(matches!(err, AppError::Format(FormatError::EmptyFile)));
}

#[test]
fn test_partial_success_continues_past_bad_rows() {
    let (service, _, transaction_repo) = sqlite_service();

    let content = "Description;Box;Category;Quantity;Value;Type;Action;Date\n\
                   Sale;;Sales;1;15000;PIX;entrada;15/01/2025\n\
                   Broken;;Sales;zero;100;PIX;entrada;15/01/2025\n\
                   Rent;;Housing;1;200000;PIX;saida;01/02/2025\n\
                   Bad date;;Sales;1;100;PIX;entrada;31/02/2025\n\
                   Bonus;;Salary;1;300000;Credit;ganho;25/03/2025";
    let summary = service.import_transactions(content).unwrap();

    assert_eq!(summary.imported, 3);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.error_samples.len(), 2);
    assert_eq!(summary.error_samples[0].line_number, 3);
    assert!(summary.error_samples[0].reason.contains("quantity"));
    assert_eq!(summary.error_samples[1].line_number, 5);
    assert!(summary.error_samples[1].reason.contains("invalid date"));

    assert_eq!(transaction_repo.list_all().unwrap().len(), 3);
}

#[test]
fn test_blank_lines_are_skipped_silently() {
    let (service, anime_repo, _) = sqlite_service();

    let content = "Name;Status;ReleaseDay;Note;Link;Seasons\n\
                   Frieren;watching;friday;;;[28]\n\
                   \n\
                   Akira;completed;;;;";
    let summary = service.import_animes(content).unwrap();

    assert_eq!(summary.imported, 2);
    assert_eq!(summary.failed, 0);
    assert!(summary.error_samples.is_empty());
    assert_eq!(anime_repo.list_all().unwrap().len(), 2);
}

#[test]
fn test_wrong_column_count_is_a_row_failure() {
    let (service, anime_repo, _) = sqlite_service();

    let content = "Name;Status;ReleaseDay;Note;Link;Seasons\n\
                   Frieren;watching\n\
                   Akira;completed;;;;";
    let summary = service.import_animes(content).unwrap();

    assert_eq!(summary.imported, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        summary.error_samples[0].reason,
        "missing fields or wrong column count"
    );
    assert_eq!(anime_repo.list_all().unwrap().len(), 1);
}

#[test]
fn test_error_samples_are_capped() {
    let (service, _, _) = sqlite_service();

    let mut content = String::from("Name;Status;ReleaseDay;Note;Link;Seasons\n");
    for i in 0..8 {
        content.push_str(&format!("Show {};dropped;;;;\n", i));
    }
    let summary = service.import_animes(&content).unwrap();

    assert_eq!(summary.imported, 0);
    assert_eq!(summary.failed, 8);
    assert_eq!(summary.error_samples.len(), ERROR_SAMPLE_LIMIT);
    assert!(summary.message().contains("and more"));
}

#[test]
fn test_row_preview_is_truncated() {
    let (service, _, _) = sqlite_service();

    let long_name = "X".repeat(120);
    let content = format!(
        "Name;Status;ReleaseDay;Note;Link;Seasons\n{};dropped;;;;",
        long_name
    );
    let summary = service.import_animes(&content).unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.error_samples[0].preview.chars().count(), 50);
}

#[test]
fn test_persistence_failure_counts_as_row_failure() {
    let pool = Arc::new(create_test_pool().unwrap());
    let anime_repo = Arc::new(SqliteAnimeRepository::new(pool));

    let mut transaction_repo = MockTransactionRepository::new();
    transaction_repo
        .expect_create()
        .times(2)
        .returning(|_| Err(AppError::Other("disk full".to_string())));

    let service = ImportService::new(anime_repo, Arc::new(transaction_repo));

    let content = "Description;Box;Category;Quantity;Value;Type;Action;Date\n\
                   Sale;;Sales;1;15000;PIX;entrada;15/01/2025\n\
                   Rent;;Housing;1;200000;PIX;saida;01/02/2025";
    let summary = service.import_transactions(content).unwrap();

    assert_eq!(summary.imported, 0);
    assert_eq!(summary.failed, 2);
    assert!(summary.error_samples[0].reason.contains("disk full"));
}
