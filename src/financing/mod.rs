//! Financing records, ingestion and annual aggregation

mod data;
mod aggregate;
pub mod loader;

pub use data::{FundingSource, FinancingRecord, AnnualFinancingTotals};
pub use aggregate::aggregate_annual_totals;
pub use loader::{load_records, load_records_from_reader, records_from_json};
