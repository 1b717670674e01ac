//! Load financing records from CSV files or JSON rows
//!
//! Accepts the English headers (`year`, `amount`) as well as the French headers used by the
//! dashboard exports (`Année`, `Montant (€)`). Other columns are ignored.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use super::{FinancingRecord, FundingSource};
use crate::error::{GreenFinanceError, Result};

const YEAR_KEYS: [&str; 4] = ["year", "Year", "Année", "Annee"];
const AMOUNT_KEYS: [&str; 4] = ["amount", "Amount", "Montant (€)", "Montant"];

/// Raw CSV row; both fields stay textual until validated
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default, alias = "Year", alias = "Année", alias = "Annee")]
    year: Option<String>,
    #[serde(default, alias = "Amount", alias = "Montant (€)", alias = "Montant")]
    amount: Option<String>,
}

impl CsvRow {
    fn to_record(self, row: usize, dataset: FundingSource) -> Result<FinancingRecord> {
        let year = self
            .year
            .ok_or_else(|| missing(dataset, row, "year"))
            .and_then(|raw| parse_year(&raw).ok_or_else(|| bad_year(dataset, row, &raw)))?;
        let amount = self
            .amount
            .ok_or_else(|| missing(dataset, row, "amount"))
            .and_then(|raw| parse_amount(&raw).ok_or_else(|| bad_amount(dataset, row, &raw)))?;

        Ok(FinancingRecord::new(year, amount, dataset))
    }
}

/// Load every record of one dataset from a CSV file
pub fn load_records<P: AsRef<Path>>(path: P, dataset: FundingSource) -> Result<Vec<FinancingRecord>> {
    let path = path.as_ref();
    debug!("loading {} financing records from {}", dataset, path.display());
    let file = std::fs::File::open(path)?;
    load_records_from_reader(file, dataset)
}

/// Load records from any reader (string buffer, upload stream)
///
/// Short rows are read as records with missing fields. A header naming the same field twice
/// (`year,Année`) is a `Schema` error on row 0.
pub fn load_records_from_reader<R: Read>(reader: R, dataset: FundingSource) -> Result<Vec<FinancingRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    check_headers(csv_reader.headers()?, dataset)?;
    let mut records = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        records.push(row.to_record(idx + 1, dataset)?);
    }

    debug!("loaded {} {} records", records.len(), dataset);
    Ok(records)
}

fn check_headers(headers: &StringRecord, dataset: FundingSource) -> Result<()> {
    for (field, keys) in [("year", &YEAR_KEYS), ("amount", &AMOUNT_KEYS)] {
        let found: Vec<&str> = headers.iter().filter(|h| keys.contains(h)).collect();
        if found.len() > 1 {
            return Err(GreenFinanceError::Schema {
                dataset,
                row: 0,
                field,
                problem: format!("appears under more than one header: {}", found.join(", ")),
            });
        }
    }
    Ok(())
}

/// Convert JSON objects (`{"year": 2020, "amount": 12.5}`) into records
///
/// Numbers and numeric strings are both accepted, under the same header names as the CSV
/// loader.
pub fn records_from_json(rows: &[Value], dataset: FundingSource) -> Result<Vec<FinancingRecord>> {
    rows.iter()
        .enumerate()
        .map(|(idx, value)| {
            let row = idx + 1;
            let year = match lookup(value, &YEAR_KEYS) {
                None => return Err(missing(dataset, row, "year")),
                Some(Value::Number(n)) => n
                    .as_i64()
                    .and_then(|y| i32::try_from(y).ok())
                    .or_else(|| n.as_f64().and_then(whole_year))
                    .ok_or_else(|| bad_year(dataset, row, &n.to_string()))?,
                Some(Value::String(s)) => {
                    parse_year(s.trim()).ok_or_else(|| bad_year(dataset, row, s))?
                }
                Some(other) => return Err(bad_year(dataset, row, &other.to_string())),
            };
            let amount = match lookup(value, &AMOUNT_KEYS) {
                None => return Err(missing(dataset, row, "amount")),
                Some(Value::Number(n)) => n
                    .as_f64()
                    .ok_or_else(|| bad_amount(dataset, row, &n.to_string()))?,
                Some(Value::String(s)) => {
                    parse_amount(s.trim()).ok_or_else(|| bad_amount(dataset, row, s))?
                }
                Some(other) => return Err(bad_amount(dataset, row, &other.to_string())),
            };
            Ok(FinancingRecord::new(year, amount, dataset))
        })
        .collect()
}

/// First non-null value under any of the accepted keys
fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| value.get(*k))
        .find(|v| !v.is_null())
}

fn parse_year(raw: &str) -> Option<i32> {
    raw.parse::<i32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(whole_year))
}

/// Spreadsheet exports often write years as `2020.0`
fn whole_year(value: f64) -> Option<i32> {
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn missing(dataset: FundingSource, row: usize, field: &'static str) -> GreenFinanceError {
    GreenFinanceError::Schema {
        dataset,
        row,
        field,
        problem: "is missing".to_string(),
    }
}

fn bad_year(dataset: FundingSource, row: usize, raw: &str) -> GreenFinanceError {
    GreenFinanceError::Schema {
        dataset,
        row,
        field: "year",
        problem: format!("is not an integer year: {:?}", raw),
    }
}

fn bad_amount(dataset: FundingSource, row: usize, raw: &str) -> GreenFinanceError {
    GreenFinanceError::Schema {
        dataset,
        row,
        field: "amount",
        problem: format!("is not numeric: {:?}", raw),
    }
}
