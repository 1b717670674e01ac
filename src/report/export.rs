//! CSV and JSON export of scenario results

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ScenarioParams;
use crate::error::Result;
use crate::scenario::{ScenarioOutcome, ScenarioSummary};

pub const HISTORY_FILE: &str = "bfv_history.csv";
pub const PROJECTION_FILE: &str = "bfv_projection.csv";
pub const DEBT_FILE: &str = "debt_projection.csv";
pub const REPORT_FILE: &str = "run_report.json";

/// Paths written by [`write_tables`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTables {
    pub history: PathBuf,
    pub projection: PathBuf,
    pub debt: PathBuf,
}

/// Serialize rows as CSV with a header taken from the row's field names
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the historical, projection and debt tables into `dir`, one CSV each
pub fn write_tables<P: AsRef<Path>>(dir: P, outcome: &ScenarioOutcome) -> Result<ExportedTables> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let tables = ExportedTables {
        history: dir.join(HISTORY_FILE),
        projection: dir.join(PROJECTION_FILE),
        debt: dir.join(DEBT_FILE),
    };

    write_csv(File::create(&tables.history)?, &outcome.history)?;
    write_csv(File::create(&tables.projection)?, &outcome.projection)?;
    write_csv(File::create(&tables.debt)?, &outcome.debt)?;

    info!("exported scenario tables to {}", dir.display());
    Ok(tables)
}

/// Self-describing record of one run: inputs, outputs and when it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub params: ScenarioParams,
    pub summary: Option<ScenarioSummary>,
    pub outcome: ScenarioOutcome,
}

impl RunReport {
    pub fn new(params: ScenarioParams, outcome: ScenarioOutcome) -> Self {
        Self {
            generated_at: Utc::now(),
            summary: outcome.summary(),
            params,
            outcome,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financing::FinancingRecord;
    use crate::scenario::run_scenario;

    fn outcome() -> ScenarioOutcome {
        let params = ScenarioParams {
            bfv_growth_rate: 0.10,
            projection_horizon_years: 2,
            ..Default::default()
        };
        run_scenario(
            &[FinancingRecord::public(2020, 100.0), FinancingRecord::public(2021, 150.0)],
            &[FinancingRecord::private(2020, 50.0)],
            &params,
        )
        .unwrap()
    }

    #[test]
    fn test_history_csv_layout() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &outcome().history).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,public_total,private_total,combined_total");
        assert_eq!(lines[1], "2020,100.0,50.0,150.0");
        assert_eq!(lines[2], "2021,150.0,0.0,150.0");
    }

    #[test]
    fn test_write_tables_creates_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let tables = write_tables(dir.path().join("out"), &outcome()).unwrap();

        let debt = std::fs::read_to_string(&tables.debt).unwrap();
        assert!(debt.starts_with("year,debt_to_gdp_ratio,subsidy_level"));
        assert_eq!(debt.lines().count(), 4);

        let projection = std::fs::read_to_string(&tables.projection).unwrap();
        assert!(projection.starts_with("year,projected_value"));
        assert_eq!(projection.lines().count(), 3);
        assert!(tables.history.exists());
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = RunReport::new(ScenarioParams::default(), outcome());
        let json = report.to_json_pretty().unwrap();

        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.outcome.history, report.outcome.history);
        assert_eq!(parsed.outcome.debt.len(), 3);
        assert_eq!(parsed.generated_at, report.generated_at);
        assert_eq!(parsed.summary.unwrap().final_projected_year, 2023);
    }
}
