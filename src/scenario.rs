//! Scenario orchestration
//!
//! Wires aggregation, projection and debt simulation together for one parameter set. The
//! financing projection and the debt trajectory are computed independently; they only meet in
//! the returned [`ScenarioOutcome`].

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ScenarioParams;
use crate::debt::{DebtSimulator, DebtState};
use crate::error::{GreenFinanceError, Result};
use crate::financing::{aggregate_annual_totals, AnnualFinancingTotals, FinancingRecord, FundingSource};
use crate::projection::{project_compound_growth, Anchor, ProjectedPoint};

/// The three result tables of one run, each in year-ascending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub history: Vec<AnnualFinancingTotals>,
    pub projection: Vec<ProjectedPoint>,
    pub debt: Vec<DebtState>,
}

/// Headline figures of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub anchor: Anchor,
    pub final_projected_year: i32,
    pub final_projected_value: f64,
    pub initial_debt_to_gdp: f64,
    pub final_debt_to_gdp: f64,
    pub final_subsidy_level: f64,
}

impl ScenarioOutcome {
    /// Summary of the run, `None` only for an outcome assembled by hand with empty tables
    pub fn summary(&self) -> Option<ScenarioSummary> {
        let anchor = Anchor::from_history(&self.history)?;
        let last_projected = self.projection.last()?;
        let first_debt = self.debt.first()?;
        let last_debt = self.debt.last()?;

        Some(ScenarioSummary {
            anchor,
            final_projected_year: last_projected.year,
            final_projected_value: last_projected.projected_value,
            initial_debt_to_gdp: first_debt.debt_to_gdp_ratio,
            final_debt_to_gdp: last_debt.debt_to_gdp_ratio,
            final_subsidy_level: last_debt.subsidy_level,
        })
    }
}

/// Run one scenario: aggregate, project, simulate
///
/// Parameters are validated before any computation. The first error from any stage is
/// returned and no partial tables are produced.
pub fn run_scenario(
    public: &[FinancingRecord],
    private: &[FinancingRecord],
    params: &ScenarioParams,
) -> Result<ScenarioOutcome> {
    params.validate()?;

    let history = aggregate_annual_totals(public, private)?;
    let anchor = Anchor::from_history(&history)
        .ok_or(GreenFinanceError::EmptyInput { dataset: FundingSource::Public })?;
    debug!("projection anchor {} = {:.2}", anchor.year, anchor.value);

    let projection = project_compound_growth(
        anchor,
        params.bfv_growth_rate,
        params.projection_horizon_years,
    )?;

    let start_year = params.debt_start_year.unwrap_or(anchor.year);
    let initial = DebtState::initial(start_year, params.initial_debt_to_gdp, params.initial_subsidies);
    let debt = DebtSimulator::new(params.debt_params())
        .simulate(initial, params.projection_horizon_years)?;

    info!(
        "scenario: {} historical years, {} projected, debt {}..={}",
        history.len(),
        projection.len(),
        start_year,
        debt.last().map(|s| s.year).unwrap_or(start_year)
    );

    Ok(ScenarioOutcome {
        history,
        projection,
        debt,
    })
}

/// Holds the two financing datasets so many parameter sets can be run against them
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(public, private);
///
/// for rate in [0.01, 0.02, 0.03] {
///     let params = ScenarioParams { bfv_growth_rate: rate, ..Default::default() };
///     let outcome = runner.run(&params)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    public: Vec<FinancingRecord>,
    private: Vec<FinancingRecord>,
}

impl ScenarioRunner {
    pub fn new(public: Vec<FinancingRecord>, private: Vec<FinancingRecord>) -> Self {
        Self { public, private }
    }

    /// Run a single scenario
    pub fn run(&self, params: &ScenarioParams) -> Result<ScenarioOutcome> {
        run_scenario(&self.public, &self.private, params)
    }

    /// Run several parameter sets in parallel; results keep the order of `params`
    pub fn run_scenarios(&self, params: &[ScenarioParams]) -> Vec<Result<ScenarioOutcome>> {
        params.par_iter().map(|p| self.run(p)).collect()
    }

    pub fn public(&self) -> &[FinancingRecord] {
        &self.public
    }

    pub fn private(&self) -> &[FinancingRecord] {
        &self.private
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_runner() -> ScenarioRunner {
        ScenarioRunner::new(
            vec![FinancingRecord::public(2020, 100.0), FinancingRecord::public(2021, 150.0)],
            vec![FinancingRecord::private(2020, 50.0)],
        )
    }

    #[test]
    fn test_full_run() {
        let params = ScenarioParams {
            bfv_growth_rate: 0.10,
            projection_horizon_years: 2,
            ..Default::default()
        };
        let outcome = sample_runner().run(&params).unwrap();

        assert_eq!(outcome.history.len(), 2);
        assert_eq!(outcome.history[1], AnnualFinancingTotals::new(2021, 150.0, 0.0));

        assert_eq!(outcome.projection.len(), 2);
        assert_eq!(outcome.projection[0].year, 2022);
        assert_relative_eq!(outcome.projection[0].projected_value, 165.0, epsilon = 1e-9);
        assert_relative_eq!(outcome.projection[1].projected_value, 181.5, epsilon = 1e-9);

        // Debt starts at the last observed year and spans the same horizon
        assert_eq!(outcome.debt.len(), 3);
        assert_eq!(outcome.debt[0], DebtState::initial(2021, 110.0, 30.0));
        assert_relative_eq!(outcome.debt[1].debt_to_gdp_ratio, 113.2703, epsilon = 1e-9);
        assert_eq!(outcome.debt[2].year, 2023);
    }

    #[test]
    fn test_explicit_debt_start_year() {
        let params = ScenarioParams {
            debt_start_year: Some(2025),
            ..Default::default()
        };
        let outcome = sample_runner().run(&params).unwrap();

        assert_eq!(outcome.debt.first().unwrap().year, 2025);
        assert_eq!(outcome.debt.last().unwrap().year, 2030);
        assert_eq!(outcome.projection.first().unwrap().year, 2022);
    }

    #[test]
    fn test_errors_propagate_without_partial_results() {
        let params = ScenarioParams {
            projection_horizon_years: 0,
            ..Default::default()
        };
        let err = sample_runner().run(&params).unwrap_err();
        assert_eq!(err.kind(), "InvalidParameterError");

        let err = run_scenario(&[], &[FinancingRecord::private(2020, 1.0)], &ScenarioParams::default())
            .unwrap_err();
        assert_eq!(err.kind(), "EmptyInputError");
    }

    #[test]
    fn test_years_near_limit_fail_cleanly() {
        let err = run_scenario(
            &[FinancingRecord::public(i32::MAX, 1.0)],
            &[FinancingRecord::private(i32::MAX, 1.0)],
            &ScenarioParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GreenFinanceError::InvalidParameter { name: "horizon", .. }));
    }

    #[test]
    fn test_parallel_scenarios_match_sequential() {
        let runner = sample_runner();
        let params: Vec<_> = [0.0, 0.02, 0.05, -0.01]
            .iter()
            .map(|&rate| ScenarioParams {
                bfv_growth_rate: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&params);
        assert_eq!(results.len(), 4);
        for (p, result) in params.iter().zip(&results).take(3) {
            assert_eq!(result.as_ref().unwrap(), &runner.run(p).unwrap());
        }
        assert!(results[3].is_err());

        // Higher growth gives a higher final projection
        let last = |r: &Result<ScenarioOutcome>| {
            r.as_ref().unwrap().summary().unwrap().final_projected_value
        };
        assert!(last(&results[2]) > last(&results[1]));
        assert!(last(&results[1]) > last(&results[0]));
    }

    #[test]
    fn test_summary() {
        let outcome = sample_runner().run(&ScenarioParams::default()).unwrap();
        let summary = outcome.summary().unwrap();

        assert_eq!(summary.anchor, Anchor::new(2021, 150.0));
        assert_eq!(summary.final_projected_year, 2026);
        assert_relative_eq!(summary.final_projected_value, 150.0 * 1.02_f64.powi(5), max_relative = 1e-12);
        assert_eq!(summary.initial_debt_to_gdp, 110.0);
        assert!(summary.final_subsidy_level < 30.0);
    }
}
