//! Run the same datasets under several BFV growth rates
//!
//! Scenarios are independent and evaluated in parallel; output keeps the order of `--rates`.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use green_finance::financing::{load_records, FundingSource};
use green_finance::{ScenarioParams, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "growth_sweep", about = "BFV projections across growth rates")]
struct Cli {
    #[arg(long)]
    public: PathBuf,

    #[arg(long)]
    private: PathBuf,

    /// Comma-separated growth rates (fractions)
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 0.01, 0.02, 0.03, 0.05])]
    rates: Vec<f64>,

    /// Base parameter file; each run overrides only the growth rate
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SweepRow {
    bfv_growth_rate: f64,
    final_year: Option<i32>,
    final_projected_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let base = match &cli.params {
        Some(path) => ScenarioParams::from_json_path(path)
            .with_context(|| format!("reading parameters from {}", path.display()))?,
        None => ScenarioParams::default(),
    };

    let runner = ScenarioRunner::new(
        load_records(&cli.public, FundingSource::Public).context("loading public financing")?,
        load_records(&cli.private, FundingSource::Private).context("loading private financing")?,
    );

    let params: Vec<ScenarioParams> = cli
        .rates
        .iter()
        .map(|&rate| ScenarioParams {
            bfv_growth_rate: rate,
            ..base.clone()
        })
        .collect();

    let rows: Vec<SweepRow> = params
        .iter()
        .zip(runner.run_scenarios(&params))
        .map(|(p, result)| match result {
            Ok(outcome) => {
                let last = outcome.projection.last();
                SweepRow {
                    bfv_growth_rate: p.bfv_growth_rate,
                    final_year: last.map(|pt| pt.year),
                    final_projected_value: last.map(|pt| pt.projected_value),
                    error: None,
                }
            }
            Err(err) => SweepRow {
                bfv_growth_rate: p.bfv_growth_rate,
                final_year: None,
                final_projected_value: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string(&rows)?);
        return Ok(());
    }

    println!("{:>10} {:>6} {:>16}", "Growth", "Year", "BFV Projected");
    println!("{}", "-".repeat(34));
    for row in &rows {
        match (&row.error, row.final_year, row.final_projected_value) {
            (None, Some(year), Some(value)) => {
                println!("{:>9.2}% {:>6} {:>16.2}", row.bfv_growth_rate * 100.0, year, value)
            }
            _ => println!(
                "{:>9.2}% error: {}",
                row.bfv_growth_rate * 100.0,
                row.error.as_deref().unwrap_or("no projection")
            ),
        }
    }
    println!("\n{} scenarios in {:?}", rows.len(), start.elapsed());

    Ok(())
}
