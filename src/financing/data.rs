//! Financing observations and annual totals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which financing dataset a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    Public,
    Private,
}

impl fmt::Display for FundingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundingSource::Public => f.write_str("public"),
            FundingSource::Private => f.write_str("private"),
        }
    }
}

/// One financing observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingRecord {
    pub year: i32,
    pub amount: f64,
    pub source: FundingSource,
}

impl FinancingRecord {
    pub fn new(year: i32, amount: f64, source: FundingSource) -> Self {
        Self { year, amount, source }
    }

    /// Shorthand for a public financing record
    pub fn public(year: i32, amount: f64) -> Self {
        Self::new(year, amount, FundingSource::Public)
    }

    /// Shorthand for a private financing record
    pub fn private(year: i32, amount: f64) -> Self {
        Self::new(year, amount, FundingSource::Private)
    }
}

/// Public, private and combined financing for one year
///
/// `combined_total` is always `public_total + private_total`; construct through
/// [`AnnualFinancingTotals::new`] so it is derived rather than supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualFinancingTotals {
    pub year: i32,
    pub public_total: f64,
    pub private_total: f64,
    pub combined_total: f64,
}

impl AnnualFinancingTotals {
    pub fn new(year: i32, public_total: f64, private_total: f64) -> Self {
        Self {
            year,
            public_total,
            private_total,
            combined_total: public_total + private_total,
        }
    }
}
