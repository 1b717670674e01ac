//! Public debt trajectory simulation
//!
//! The trajectory is a fold of [`DebtState::step`] over the horizon: every state depends only
//! on its predecessor and the constant [`DebtParams`].

use log::{debug, warn};

use super::state::{DebtParams, DebtState};
use crate::error::{GreenFinanceError, Result};
use crate::projection::horizon_end_year;

/// Runs the debt recurrence for a fixed set of economic parameters
#[derive(Debug, Clone)]
pub struct DebtSimulator {
    params: DebtParams,
}

impl DebtSimulator {
    pub fn new(params: DebtParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DebtParams {
        &self.params
    }

    /// Simulate `horizon` years after `initial`, returning `horizon + 1` states
    ///
    /// The initial state is the first entry, unmodified. A subsidy reduction rate outside
    /// `[0, 1)` is accepted but makes subsidies grow or change sign; negative debt or subsidy
    /// values are returned as computed.
    pub fn simulate(&self, initial: DebtState, horizon: u32) -> Result<Vec<DebtState>> {
        if horizon < 1 {
            return Err(GreenFinanceError::invalid_parameter(
                "horizon",
                horizon,
                "must be at least 1 year",
            ));
        }
        self.check_finite(&initial)?;
        let end_year = horizon_end_year(initial.year, horizon)?;

        let rate = self.params.subsidy_reduction_rate;
        if !(0.0..1.0).contains(&rate) {
            warn!("subsidy reduction rate {} is outside [0, 1); subsidies will not decay", rate);
        }

        let trajectory: Vec<DebtState> =
            std::iter::successors(Some(initial), |prev| prev.step(&self.params))
                .take(horizon as usize + 1)
                .collect();

        if trajectory
            .iter()
            .any(|s| s.debt_to_gdp_ratio < 0.0 || s.subsidy_level < 0.0)
        {
            warn!("debt trajectory from {} contains negative values", initial.year);
        }
        debug!(
            "simulated debt {}..={}: {:.4}% -> {:.4}%",
            initial.year,
            end_year,
            initial.debt_to_gdp_ratio,
            trajectory.last().map(|s| s.debt_to_gdp_ratio).unwrap_or(initial.debt_to_gdp_ratio),
        );

        Ok(trajectory)
    }

    fn check_finite(&self, initial: &DebtState) -> Result<()> {
        let values = [
            ("initial_debt_to_gdp", initial.debt_to_gdp_ratio),
            ("initial_subsidies", initial.subsidy_level),
            ("gdp_growth_rate", self.params.gdp_growth),
            ("inflation_rate", self.params.inflation),
            ("subsidy_reduction_rate", self.params.subsidy_reduction_rate),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(GreenFinanceError::invalid_parameter(
                    name,
                    value,
                    "must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

impl Default for DebtSimulator {
    fn default() -> Self {
        Self::new(DebtParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_year_horizon() {
        let states = DebtSimulator::default()
            .simulate(DebtState::initial(2021, 110.0, 30.0), 1)
            .unwrap();

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], DebtState::initial(2021, 110.0, 30.0));
        assert_eq!(states[1].year, 2022);
        assert_relative_eq!(states[1].subsidy_level, 29.7, epsilon = 1e-12);
        assert_relative_eq!(states[1].debt_to_gdp_ratio, 113.2703, epsilon = 1e-9);
    }

    #[test]
    fn test_matches_loop_accumulation() {
        let params = DebtParams {
            gdp_growth: 0.015,
            inflation: 0.025,
            subsidy_reduction_rate: 0.05,
        };
        let states = DebtSimulator::new(params)
            .simulate(DebtState::initial(2024, 98.5, 42.0), 10)
            .unwrap();
        assert_eq!(states.len(), 11);

        let mut debt = 98.5;
        let mut subsidy = 42.0;
        for (i, state) in states.iter().enumerate().skip(1) {
            subsidy *= 1.0 - 0.05;
            debt = debt * (1.0 + 0.015 + 0.025) - subsidy / 1000.0;
            assert_eq!(state.year, 2024 + i as i32);
            assert_relative_eq!(state.subsidy_level, subsidy, max_relative = 1e-12);
            assert_relative_eq!(state.debt_to_gdp_ratio, debt, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_rerun_is_bit_identical() {
        let sim = DebtSimulator::default();
        let initial = DebtState::initial(2020, 110.0, 30.0);

        let a = sim.simulate(initial, 10).unwrap();
        let b = sim.simulate(initial, 10).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.debt_to_gdp_ratio.to_bits(), y.debt_to_gdp_ratio.to_bits());
            assert_eq!(x.subsidy_level.to_bits(), y.subsidy_level.to_bits());
        }
    }

    #[test]
    fn test_subsidy_never_increases() {
        for rate in [0.0, 0.01, 0.1, 0.5, 0.99] {
            let sim = DebtSimulator::new(DebtParams {
                subsidy_reduction_rate: rate,
                ..DebtParams::default()
            });
            let states = sim.simulate(DebtState::initial(2020, 110.0, 30.0), 10).unwrap();
            assert!(
                states.windows(2).all(|w| w[1].subsidy_level <= w[0].subsidy_level),
                "subsidy increased at rate {}",
                rate
            );
        }
    }

    #[test]
    fn test_out_of_range_reduction_rate_is_accepted() {
        let sim = DebtSimulator::new(DebtParams {
            subsidy_reduction_rate: 1.2,
            ..DebtParams::default()
        });
        let states = sim.simulate(DebtState::initial(2020, 110.0, 30.0), 2).unwrap();
        assert!(states[1].subsidy_level < 0.0);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = DebtSimulator::default()
            .simulate(DebtState::initial(2020, 110.0, 30.0), 0)
            .unwrap_err();
        assert!(matches!(err, GreenFinanceError::InvalidParameter { name: "horizon", .. }));
    }

    #[test]
    fn test_horizon_past_last_year_rejected() {
        let sim = DebtSimulator::default();

        let err = sim.simulate(DebtState::initial(i32::MAX, 110.0, 30.0), 1).unwrap_err();
        assert!(matches!(err, GreenFinanceError::InvalidParameter { name: "horizon", .. }));

        let err = sim.simulate(DebtState::initial(2020, 110.0, 30.0), u32::MAX).unwrap_err();
        assert_eq!(err.kind(), "InvalidParameterError");

        let states = sim.simulate(DebtState::initial(i32::MAX - 1, 110.0, 30.0), 1).unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[1].year, i32::MAX);
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let sim = DebtSimulator::new(DebtParams {
            inflation: f64::INFINITY,
            ..DebtParams::default()
        });
        let err = sim.simulate(DebtState::initial(2020, 110.0, 30.0), 3).unwrap_err();
        assert!(matches!(err, GreenFinanceError::InvalidParameter { name: "inflation_rate", .. }));
    }
}
