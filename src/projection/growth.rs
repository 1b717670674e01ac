//! Compound-growth extrapolation from a single anchor point

use serde::{Deserialize, Serialize};

use crate::error::{GreenFinanceError, Result};
use crate::financing::AnnualFinancingTotals;

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub year: i32,
    pub projected_value: f64,
}

/// Last observed data point that projection starts from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub year: i32,
    pub value: f64,
}

impl Anchor {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }

    /// Latest year of the aggregated history and its combined total
    pub fn from_history(history: &[AnnualFinancingTotals]) -> Option<Self> {
        history
            .iter()
            .max_by_key(|t| t.year)
            .map(|t| Self::new(t.year, t.combined_total))
    }
}

/// Project `horizon` years past the anchor: `value(year₀ + k) = value₀ · (1 + g)^k`
///
/// Fails with `InvalidParameter` when the growth rate is negative or not finite, or when the
/// horizon is zero or would run past the last representable year.
pub fn project_compound_growth(anchor: Anchor, growth_rate: f64, horizon: u32) -> Result<Vec<ProjectedPoint>> {
    if !growth_rate.is_finite() {
        return Err(GreenFinanceError::invalid_parameter(
            "growth_rate",
            growth_rate,
            "must be a finite number",
        ));
    }
    if growth_rate < 0.0 {
        return Err(GreenFinanceError::invalid_parameter(
            "growth_rate",
            growth_rate,
            "must not be negative",
        ));
    }
    if horizon < 1 {
        return Err(GreenFinanceError::invalid_parameter(
            "horizon",
            horizon,
            "must be at least 1 year",
        ));
    }

    horizon_end_year(anchor.year, horizon)?;

    // Every k fits in i32 and anchor.year + k cannot overflow once the end year exists
    let factor = 1.0 + growth_rate;
    Ok((1..=horizon as i32)
        .map(|k| ProjectedPoint {
            year: anchor.year + k,
            projected_value: anchor.value * factor.powi(k),
        })
        .collect())
}

/// Year reached `horizon` years after `start`
pub(crate) fn horizon_end_year(start: i32, horizon: u32) -> Result<i32> {
    i32::try_from(horizon)
        .ok()
        .and_then(|h| start.checked_add(h))
        .ok_or_else(|| {
            GreenFinanceError::invalid_parameter(
                "horizon",
                horizon,
                "runs past the last representable year",
            )
        })
}
