//! Consumers of scenario results: export files, console tables, recommendation prompt
//!
//! Nothing here feeds back into the computation; every function takes a finished
//! [`ScenarioOutcome`](crate::scenario::ScenarioOutcome).

pub mod export;
pub mod prompt;
pub mod table;

pub use export::{write_tables, ExportedTables, RunReport};
pub use prompt::StrategyPrompt;
pub use table::render_outcome;
