//! Green Finance - green financing need (BFV) and public debt projections
//!
//! This library provides:
//! - Loading of public and private green financing records (CSV or JSON)
//! - Aggregation into annual public, private and combined totals
//! - Compound-growth projection of the financing need
//! - Public debt-to-GDP trajectory under GDP growth, inflation and decaying subsidies
//! - Export of the result tables and the text of a strategy recommendation request

pub mod error;
pub mod financing;
pub mod projection;
pub mod debt;
pub mod config;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{GreenFinanceError, Result};
pub use financing::{FinancingRecord, FundingSource, AnnualFinancingTotals};
pub use projection::{Anchor, ProjectedPoint};
pub use debt::{DebtParams, DebtState, DebtSimulator};
pub use config::ScenarioParams;
pub use scenario::{run_scenario, ScenarioOutcome, ScenarioRunner};
