//! Scenario parameters
//!
//! Every option has a default so a parameter file only needs the values it changes:
//!
//! ```json
//! { "bfv_growth_rate": 0.035, "projection_horizon_years": 8 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::debt::DebtParams;
use crate::error::{GreenFinanceError, Result};

pub const DEFAULT_BFV_GROWTH_RATE: f64 = 0.02;
pub const DEFAULT_PROJECTION_HORIZON_YEARS: u32 = 5;
pub const MAX_PROJECTION_HORIZON_YEARS: u32 = 10;
pub const DEFAULT_INITIAL_DEBT_TO_GDP: f64 = 110.0;
pub const DEFAULT_GDP_GROWTH_RATE: f64 = 0.01;
pub const DEFAULT_INFLATION_RATE: f64 = 0.02;
pub const DEFAULT_INITIAL_SUBSIDIES: f64 = 30.0;
pub const DEFAULT_SUBSIDY_REDUCTION_RATE: f64 = 0.01;

/// Inputs to one scenario run, passed by value to the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    /// Annual growth of the green financing need (fraction)
    pub bfv_growth_rate: f64,

    /// Years projected for both the financing need and the debt trajectory (1-10)
    pub projection_horizon_years: u32,

    /// Starting public debt, percent of GDP
    pub initial_debt_to_gdp: f64,

    pub gdp_growth_rate: f64,

    pub inflation_rate: f64,

    /// Starting public subsidies, billions
    pub initial_subsidies: f64,

    pub subsidy_reduction_rate: f64,

    /// First year of the debt trajectory; `None` uses the last observed financing year
    pub debt_start_year: Option<i32>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            bfv_growth_rate: DEFAULT_BFV_GROWTH_RATE,
            projection_horizon_years: DEFAULT_PROJECTION_HORIZON_YEARS,
            initial_debt_to_gdp: DEFAULT_INITIAL_DEBT_TO_GDP,
            gdp_growth_rate: DEFAULT_GDP_GROWTH_RATE,
            inflation_rate: DEFAULT_INFLATION_RATE,
            initial_subsidies: DEFAULT_INITIAL_SUBSIDIES,
            subsidy_reduction_rate: DEFAULT_SUBSIDY_REDUCTION_RATE,
            debt_start_year: None,
        }
    }
}

impl ScenarioParams {
    /// Parse a JSON parameter document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Economic parameters of the debt recurrence
    pub fn debt_params(&self) -> DebtParams {
        DebtParams {
            gdp_growth: self.gdp_growth_rate,
            inflation: self.inflation_rate,
            subsidy_reduction_rate: self.subsidy_reduction_rate,
        }
    }

    /// Check every option against its accepted range
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("bfv_growth_rate", self.bfv_growth_rate),
            ("initial_debt_to_gdp", self.initial_debt_to_gdp),
            ("gdp_growth_rate", self.gdp_growth_rate),
            ("inflation_rate", self.inflation_rate),
            ("initial_subsidies", self.initial_subsidies),
            ("subsidy_reduction_rate", self.subsidy_reduction_rate),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(GreenFinanceError::invalid_parameter(name, value, "must be a finite number"));
            }
        }

        if self.bfv_growth_rate < 0.0 {
            return Err(GreenFinanceError::invalid_parameter(
                "bfv_growth_rate",
                self.bfv_growth_rate,
                "must not be negative",
            ));
        }
        if !(1..=MAX_PROJECTION_HORIZON_YEARS).contains(&self.projection_horizon_years) {
            return Err(GreenFinanceError::invalid_parameter(
                "projection_horizon_years",
                self.projection_horizon_years,
                "must be between 1 and 10",
            ));
        }
        if !(0.0..1.0).contains(&self.subsidy_reduction_rate) {
            return Err(GreenFinanceError::invalid_parameter(
                "subsidy_reduction_rate",
                self.subsidy_reduction_rate,
                "must be in [0, 1)",
            ));
        }

        Ok(())
    }
}
