// src/services/summary_service.rs
//
// Derived figures for the summary screens. Everything is recomputed
// from the record tables on demand; entry totals are always
// quantity * unit_value in minor units.

use chrono::Datelike;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::summary::{AnimeStatistics, CategorySummary, FlowTotals, MonthKey, MonthlyActivity};
use crate::domain::{EntryAction, WatchStatus};
use crate::error::AppResult;
use crate::repositories::{AnimeRepository, TransactionRepository};

pub struct SummaryService {
    anime_repo: Arc<dyn AnimeRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
}

impl SummaryService {
    pub fn new(
        anime_repo: Arc<dyn AnimeRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            anime_repo,
            transaction_repo,
        }
    }

    /// Per-category totals plus the largest single entry either way
    pub fn category_summary(&self) -> AppResult<BTreeMap<String, CategorySummary>> {
        let entries = self.transaction_repo.list_all()?;
        let mut summary: BTreeMap<String, CategorySummary> = BTreeMap::new();

        for entry in &entries {
            let total = entry.total();
            let bucket = summary.entry(entry.category.clone()).or_default();

            match entry.action {
                EntryAction::Income => {
                    bucket.total_income += total;
                    if total > bucket.max_single_income {
                        bucket.max_single_income = total;
                    }
                }
                EntryAction::Expense => {
                    bucket.total_expense += total;
                    if total > bucket.max_single_expense {
                        bucket.max_single_expense = total;
                    }
                }
            }
        }

        Ok(summary)
    }

    /// Per-box totals; entries without a box group under the empty label
    pub fn box_summary(&self) -> AppResult<BTreeMap<String, FlowTotals>> {
        let entries = self.transaction_repo.list_all()?;
        let mut summary: BTreeMap<String, FlowTotals> = BTreeMap::new();

        for entry in &entries {
            let key = entry.box_label.clone().unwrap_or_default();
            let bucket = summary.entry(key).or_default();
            match entry.action {
                EntryAction::Income => bucket.income += entry.total(),
                EntryAction::Expense => bucket.expense += entry.total(),
            }
        }

        Ok(summary)
    }

    /// Overall balance: income minus expense, minor units
    pub fn current_balance(&self) -> AppResult<i64> {
        let entries = self.transaction_repo.list_all()?;
        Ok(entries
            .iter()
            .map(|entry| match entry.action {
                EntryAction::Income => entry.total(),
                EntryAction::Expense => -entry.total(),
            })
            .sum())
    }

    /// Chronological month buckets with per category × payment-type lines
    pub fn monthly_ledger(&self) -> AppResult<BTreeMap<MonthKey, MonthlyActivity>> {
        let entries = self.transaction_repo.list_all()?;
        let mut ledger: BTreeMap<MonthKey, MonthlyActivity> = BTreeMap::new();

        for entry in &entries {
            let key = MonthKey {
                year: entry.date.year(),
                month: entry.date.month(),
            };
            let month = ledger.entry(key).or_default();
            let line = month
                .lines
                .entry((entry.category.clone(), entry.transaction_type))
                .or_default();

            match entry.action {
                EntryAction::Income => {
                    month.totals.income += entry.total();
                    line.income += entry.total();
                }
                EntryAction::Expense => {
                    month.totals.expense += entry.total();
                    line.expense += entry.total();
                }
            }
        }

        Ok(ledger)
    }

    /// Watch-list rollup for the tools screen
    pub fn anime_statistics(&self) -> AppResult<AnimeStatistics> {
        let animes = self.anime_repo.list_all()?;
        let mut stats = AnimeStatistics {
            total_animes: animes.len() as u32,
            ..AnimeStatistics::default()
        };

        for anime in &animes {
            match anime.status {
                WatchStatus::Watching => stats.watching += 1,
                WatchStatus::Completed => stats.completed += 1,
            }
            stats.total_episodes += anime.total_episodes();
        }

        Ok(stats)
    }
}
