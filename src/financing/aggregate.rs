//! Annual aggregation of public and private financing flows
//!
//! Each dataset is summed per year independently, then the two are merged on year with an
//! outer join: a year seen in only one dataset gets a zero total on the other side.

use std::collections::BTreeMap;

use log::debug;

use super::{AnnualFinancingTotals, FinancingRecord, FundingSource};
use crate::error::{GreenFinanceError, Result};

/// Aggregate public and private records into year-ascending annual totals
///
/// The dataset a record is summed into is decided by the slice it arrives in, not by its
/// `source` tag. Fails with `EmptyInput` if either slice is empty and with `Schema` if an
/// amount is NaN or infinite.
pub fn aggregate_annual_totals(
    public: &[FinancingRecord],
    private: &[FinancingRecord],
) -> Result<Vec<AnnualFinancingTotals>> {
    if public.is_empty() {
        return Err(GreenFinanceError::EmptyInput { dataset: FundingSource::Public });
    }
    if private.is_empty() {
        return Err(GreenFinanceError::EmptyInput { dataset: FundingSource::Private });
    }

    let public_by_year = sum_by_year(public, FundingSource::Public)?;
    let private_by_year = sum_by_year(private, FundingSource::Private)?;

    let mut years: Vec<i32> = public_by_year
        .keys()
        .chain(private_by_year.keys())
        .copied()
        .collect();
    years.sort_unstable();
    years.dedup();

    let totals: Vec<AnnualFinancingTotals> = years
        .into_iter()
        .map(|year| {
            AnnualFinancingTotals::new(
                year,
                public_by_year.get(&year).copied().unwrap_or(0.0),
                private_by_year.get(&year).copied().unwrap_or(0.0),
            )
        })
        .collect();

    debug!(
        "aggregated {} public and {} private records into {} years",
        public.len(),
        private.len(),
        totals.len()
    );

    Ok(totals)
}

/// Sum amounts per year, in record order
fn sum_by_year(records: &[FinancingRecord], dataset: FundingSource) -> Result<BTreeMap<i32, f64>> {
    let mut sums = BTreeMap::new();

    for (idx, record) in records.iter().enumerate() {
        if !record.amount.is_finite() {
            return Err(GreenFinanceError::Schema {
                dataset,
                row: idx + 1,
                field: "amount",
                problem: format!("is not a finite number: {}", record.amount),
            });
        }
        *sums.entry(record.year).or_insert(0.0) += record.amount;
    }

    Ok(sums)
}
