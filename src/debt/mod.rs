//! Public debt trajectory under GDP growth, inflation and decaying subsidies

mod state;
mod simulator;

pub use state::{DebtParams, DebtState, SUBSIDY_TO_DEBT_POINTS_DIVISOR};
pub use simulator::DebtSimulator;
