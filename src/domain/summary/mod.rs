pub mod entity;

pub use entity::{
    format_currency, AnimeStatistics, CategorySummary, FlowTotals, MonthKey, MonthlyActivity,
};
