//! Fixed-width console tables

use std::fmt::Write;

use crate::debt::DebtState;
use crate::financing::AnnualFinancingTotals;
use crate::projection::ProjectedPoint;
use crate::scenario::ScenarioOutcome;

pub fn render_history(rows: &[AnnualFinancingTotals]) -> String {
    let mut out = format!("{:>6} {:>16} {:>16} {:>16}\n", "Year", "Public", "Private", "BFV Total");
    out.push_str(&"-".repeat(57));
    out.push('\n');
    for row in rows {
        let _ = writeln!(
            out,
            "{:>6} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.public_total, row.private_total, row.combined_total
        );
    }
    out
}

pub fn render_projection(rows: &[ProjectedPoint]) -> String {
    let mut out = format!("{:>6} {:>16}\n", "Year", "BFV Projected");
    out.push_str(&"-".repeat(23));
    out.push('\n');
    for row in rows {
        let _ = writeln!(out, "{:>6} {:>16.2}", row.year, row.projected_value);
    }
    out
}

pub fn render_debt(rows: &[DebtState]) -> String {
    let mut out = format!("{:>6} {:>14} {:>16}\n", "Year", "Debt (% GDP)", "Subsidies (bn)");
    out.push_str(&"-".repeat(38));
    out.push('\n');
    for row in rows {
        let _ = writeln!(
            out,
            "{:>6} {:>14.4} {:>16.4}",
            row.year, row.debt_to_gdp_ratio, row.subsidy_level
        );
    }
    out
}

/// All three tables with section titles
pub fn render_outcome(outcome: &ScenarioOutcome) -> String {
    format!(
        "Green financing need (history)\n{}\nGreen financing need (projection)\n{}\nPublic debt trajectory\n{}",
        render_history(&outcome.history),
        render_projection(&outcome.projection),
        render_debt(&outcome.debt),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_rows() {
        let text = render_history(&[AnnualFinancingTotals::new(2020, 100.0, 50.0)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("BFV Total"));
        assert_eq!(lines[2], format!("{:>6} {:>16} {:>16} {:>16}", 2020, "100.00", "50.00", "150.00"));
    }

    #[test]
    fn test_debt_precision() {
        let text = render_debt(&[DebtState::initial(2021, 113.2703, 29.7)]);
        assert!(text.contains("113.2703"));
        assert!(text.contains("29.7000"));
    }
}
