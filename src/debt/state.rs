//! Debt trajectory state and its one-year recurrence

use serde::{Deserialize, Serialize};

/// Subsidies are expressed in billions while the debt ratio is in GDP percentage points.
/// The trajectory subtracts `subsidy / 1000` points per year regardless of the GDP level.
pub const SUBSIDY_TO_DEBT_POINTS_DIVISOR: f64 = 1000.0;

/// Constant annual economic parameters, all fractional (0.02 = 2%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtParams {
    pub gdp_growth: f64,
    pub inflation: f64,
    pub subsidy_reduction_rate: f64,
}

impl Default for DebtParams {
    fn default() -> Self {
        Self {
            gdp_growth: 0.01,
            inflation: 0.02,
            subsidy_reduction_rate: 0.01,
        }
    }
}

/// Debt ratio and subsidy level for one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtState {
    pub year: i32,

    /// Public debt in percent of GDP
    pub debt_to_gdp_ratio: f64,

    /// Public subsidies in billions
    pub subsidy_level: f64,
}

impl DebtState {
    pub fn initial(year: i32, debt_to_gdp_ratio: f64, subsidy_level: f64) -> Self {
        Self {
            year,
            debt_to_gdp_ratio,
            subsidy_level,
        }
    }

    /// State one year later
    ///
    /// The subsidy decays geometrically first; the debt ratio then grows by
    /// `gdp_growth + inflation` (added, not compounded) and is reduced by the decayed subsidy.
    /// Nothing is floored at zero. `None` once the year would pass `i32::MAX`.
    pub fn step(&self, params: &DebtParams) -> Option<DebtState> {
        let subsidy_level = self.subsidy_level * (1.0 - params.subsidy_reduction_rate);
        let debt_to_gdp_ratio = self.debt_to_gdp_ratio * (1.0 + params.gdp_growth + params.inflation)
            - subsidy_level / SUBSIDY_TO_DEBT_POINTS_DIVISOR;

        Some(DebtState {
            year: self.year.checked_add(1)?,
            debt_to_gdp_ratio,
            subsidy_level,
        })
    }
}
