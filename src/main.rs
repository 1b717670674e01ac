//! Green Finance CLI
//!
//! Loads public and private financing CSVs, runs one scenario and prints the result tables

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use green_finance::financing::{load_records, FundingSource};
use green_finance::report::{prompt::DEFAULT_REGION, render_outcome, write_tables, RunReport, StrategyPrompt};
use green_finance::{run_scenario, ScenarioParams};

#[derive(Parser, Debug)]
#[command(name = "green_finance", version, about = "Green financing need and public debt projections")]
struct Cli {
    /// Public financing records (CSV with year and amount columns)
    #[arg(long)]
    public: PathBuf,

    /// Private financing records (CSV with year and amount columns)
    #[arg(long)]
    private: PathBuf,

    /// JSON parameter file; flags below override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Annual BFV growth (fraction, e.g. 0.02)
    #[arg(long)]
    bfv_growth_rate: Option<f64>,

    /// Projection horizon in years (1-10)
    #[arg(long)]
    horizon: Option<u32>,

    /// Initial public debt (% of GDP)
    #[arg(long)]
    initial_debt: Option<f64>,

    #[arg(long)]
    gdp_growth_rate: Option<f64>,

    #[arg(long)]
    inflation_rate: Option<f64>,

    /// Initial public subsidies (billions)
    #[arg(long)]
    initial_subsidies: Option<f64>,

    #[arg(long)]
    subsidy_reduction_rate: Option<f64>,

    /// First year of the debt trajectory (default: last observed financing year)
    #[arg(long)]
    debt_start_year: Option<i32>,

    /// Write the three result tables and a JSON run report into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Print the run report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Also print the strategy recommendation request
    #[arg(long)]
    prompt: bool,

    /// Region named in the recommendation request
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,
}

impl Cli {
    fn scenario_params(&self) -> anyhow::Result<ScenarioParams> {
        let mut params = match &self.params {
            Some(path) => ScenarioParams::from_json_path(path)
                .with_context(|| format!("reading parameters from {}", path.display()))?,
            None => ScenarioParams::default(),
        };

        if let Some(v) = self.bfv_growth_rate {
            params.bfv_growth_rate = v;
        }
        if let Some(v) = self.horizon {
            params.projection_horizon_years = v;
        }
        if let Some(v) = self.initial_debt {
            params.initial_debt_to_gdp = v;
        }
        if let Some(v) = self.gdp_growth_rate {
            params.gdp_growth_rate = v;
        }
        if let Some(v) = self.inflation_rate {
            params.inflation_rate = v;
        }
        if let Some(v) = self.initial_subsidies {
            params.initial_subsidies = v;
        }
        if let Some(v) = self.subsidy_reduction_rate {
            params.subsidy_reduction_rate = v;
        }
        if self.debt_start_year.is_some() {
            params.debt_start_year = self.debt_start_year;
        }

        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.scenario_params()?;

    let public = load_records(&cli.public, FundingSource::Public)
        .with_context(|| format!("loading public financing from {}", cli.public.display()))?;
    let private = load_records(&cli.private, FundingSource::Private)
        .with_context(|| format!("loading private financing from {}", cli.private.display()))?;

    let outcome = run_scenario(&public, &private, &params)?;

    let prompt = if cli.prompt {
        Some(StrategyPrompt::build(&outcome, &params, &cli.region)?)
    } else {
        None
    };

    let report = RunReport::new(params, outcome);

    if let Some(dir) = &cli.export_dir {
        let tables = write_tables(dir, &report.outcome)
            .with_context(|| format!("exporting tables to {}", dir.display()))?;
        report.write_json(dir.join(green_finance::report::export::REPORT_FILE))?;
        if !cli.json {
            println!("Tables written to:");
            println!("  {}", tables.history.display());
            println!("  {}", tables.projection.display());
            println!("  {}", tables.debt.display());
            println!();
        }
    }

    if cli.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("Green Finance v{}", env!("CARGO_PKG_VERSION"));
        println!("======================\n");
        println!("{}", render_outcome(&report.outcome));

        if let Some(summary) = &report.summary {
            println!("Summary:");
            println!("  Anchor:            {} = {:.2}", summary.anchor.year, summary.anchor.value);
            println!(
                "  BFV in {}:       {:.2}",
                summary.final_projected_year, summary.final_projected_value
            );
            println!(
                "  Debt (% GDP):      {:.4} -> {:.4}",
                summary.initial_debt_to_gdp, summary.final_debt_to_gdp
            );
            println!("  Final subsidies:   {:.4}", summary.final_subsidy_level);
        }
    }

    if let Some(prompt) = prompt {
        println!("\n{}", serde_json::to_string_pretty(&prompt.messages())?);
    }

    Ok(())
}
