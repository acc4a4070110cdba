// End-to-end exercise of the exchange pipeline against real SQLite
// storage: legacy file in, canonical file out, re-import of the
// exported blob, and the derived summary/report on top.

use anyhow::Result;
use std::sync::Arc;

use trackhub::{
    create_test_pool, AnimeRepository, ExportService, ExportWorkspace, ImportService,
    ReportService, SqliteAnimeRepository, SqliteTransactionRepository, SummaryService,
    WatchStatus,
};

struct Fixture {
    anime_repo: Arc<SqliteAnimeRepository>,
    transaction_repo: Arc<SqliteTransactionRepository>,
}

impl Fixture {
    fn new() -> Result<Self> {
        let pool = Arc::new(create_test_pool()?);
        Ok(Fixture {
            anime_repo: Arc::new(SqliteAnimeRepository::new(pool.clone())),
            transaction_repo: Arc::new(SqliteTransactionRepository::new(pool)),
        })
    }

    fn import_service(&self) -> ImportService {
        ImportService::new(self.anime_repo.clone(), self.transaction_repo.clone())
    }

    fn export_service(&self, workspace: Arc<ExportWorkspace>) -> ExportService {
        ExportService::new(
            self.anime_repo.clone(),
            self.transaction_repo.clone(),
            workspace,
        )
    }
}

#[test]
fn legacy_anime_file_round_trips_through_export() -> Result<()> {
    let fixture = Fixture::new()?;
    let import = fixture.import_service();

    let legacy = "Nome;Status;Lançamento;Observação;Link;Temporadas\n\
                  \"Steins;Gate\";já assistido;;\"note with \"\"quotes\"\"\";;[24]\n\
                  Naruto;assistindo;segunda;;;[220]";
    let summary = import.import_animes(legacy)?;
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.failed, 0);

    let tmp = tempfile::tempdir()?;
    let workspace = Arc::new(ExportWorkspace::at(tmp.path().to_path_buf()));
    let export = fixture.export_service(workspace);

    let text = export.export_animes_text()?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Name;Status;ReleaseDay;Note;Link;Seasons"));
    assert_eq!(
        lines.next(),
        Some("\"Steins;Gate\";completed;;\"note with \"\"quotes\"\"\";;[24]")
    );
    assert_eq!(lines.next(), Some("Naruto;watching;monday;;;[220]"));

    // The canonical export must re-import cleanly into a fresh store
    let fresh = Fixture::new()?;
    let reimport = fresh.import_service().import_animes(&text)?;
    assert_eq!(reimport.imported, 2);
    assert_eq!(reimport.failed, 0);

    let animes = fresh.anime_repo.list_all()?;
    let steins = animes.iter().find(|a| a.name == "Steins;Gate").unwrap();
    assert_eq!(steins.status, WatchStatus::Completed);
    assert_eq!(steins.note.as_deref(), Some("note with \"quotes\""));

    Ok(())
}

#[test]
fn ledger_import_feeds_summary_and_report() -> Result<()> {
    let fixture = Fixture::new()?;
    let import = fixture.import_service();

    let ledger = "Descrição;Categoria;Quantidade;Valor;Tipo;Ação;Data\n\
                  Salário;Renda;1;500000;PIX;entrada;05/03/2025\n\
                  Aluguel;Moradia;1;200000;PIX;saida;01/03/2025\n\
                  Mercado;Alimentação;2;40000;Débito;gasto;12/03/2025";
    let summary = import.import_transactions(ledger)?;
    assert_eq!(summary.imported, 3);

    let summaries = SummaryService::new(fixture.anime_repo.clone(), fixture.transaction_repo.clone());
    assert_eq!(summaries.current_balance()?, 500000 - 200000 - 80000);

    let ledger_by_month = summaries.monthly_ledger()?;
    assert_eq!(ledger_by_month.len(), 1);
    let march = ledger_by_month.values().next().unwrap();
    assert_eq!(march.totals.income, 500000);
    assert_eq!(march.totals.expense, 280000);

    let tmp = tempfile::tempdir()?;
    let workspace = Arc::new(ExportWorkspace::at(tmp.path().to_path_buf()));
    let reports = ReportService::new(Arc::new(summaries), workspace);

    let path = reports.generate_report_file()?;
    let html = std::fs::read_to_string(&path)?;
    assert!(html.contains("Month: March - 2025"));
    assert!(html.contains("R$ 5.000,00"));

    Ok(())
}

#[test]
fn exported_ledger_file_lands_in_the_workspace() -> Result<()> {
    let fixture = Fixture::new()?;
    let import = fixture.import_service();
    import.import_transactions(
        "Description;Box;Category;Quantity;Value;Type;Action;Date\n\
         Sale;Shop;Sales;1;15000;PIX;income;15/01/2025",
    )?;

    let tmp = tempfile::tempdir()?;
    let workspace = Arc::new(ExportWorkspace::at(tmp.path().to_path_buf()));
    let export = fixture.export_service(workspace);

    let path = export.export_transactions_file()?;
    let content = std::fs::read_to_string(&path)?;
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("transactions_"));
    assert_eq!(
        content.lines().next(),
        Some("Description;Box;Category;Quantity;Value;Type;Action;Date")
    );
    assert!(content.contains("Sale;Shop;Sales;1;15000;PIX;income;15/01/2025"));

    Ok(())
}
