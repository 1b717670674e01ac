//! Recommendation request text for the strategy-writing language model
//!
//! Only the text is produced here; sending it and reading the reply belong to the caller.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::ScenarioParams;
use crate::error::Result;
use crate::scenario::ScenarioOutcome;

pub const DEFAULT_REGION: &str = "France";

const SYSTEM_PROMPT: &str = "You are an expert in green public finance.";

/// System and user messages of a chat-completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPrompt {
    pub system: String,
    pub user: String,
}

impl StrategyPrompt {
    pub fn build(outcome: &ScenarioOutcome, params: &ScenarioParams, region: &str) -> Result<Self> {
        let projection = serde_json::to_string(&outcome.projection)?;
        let debt = serde_json::to_string(&outcome.debt)?;

        let user = format!(
            "You are an expert in green finance and public economics.\n\n\
             Projected data for {region}:\n\n\
             Green financing need (BFV), billions EUR: {projection}\n\
             Public debt, % of GDP: {debt}\n\n\
             Assumptions: BFV growth {bfv}, GDP growth {gdp}, inflation {inflation}, \
             subsidy reduction {subsidy} per year.\n\n\
             Propose a five-point budgetary and fiscal strategy to reach carbon neutrality by 2030 \
             while keeping public debt sustainable.",
            region = region,
            projection = projection,
            debt = debt,
            bfv = percent(params.bfv_growth_rate),
            gdp = percent(params.gdp_growth_rate),
            inflation = percent(params.inflation_rate),
            subsidy = percent(params.subsidy_reduction_rate),
        );

        Ok(Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        })
    }

    /// `messages` array in the chat-completion wire format
    pub fn messages(&self) -> serde_json::Value {
        json!([
            { "role": "system", "content": self.system },
            { "role": "user", "content": self.user },
        ])
    }
}

/// Fraction as a percentage with two decimals (0.015 -> "1.50%")
pub fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financing::FinancingRecord;
    use crate::scenario::run_scenario;

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(0.01), "1.00%");
        assert_eq!(percent(0.0275), "2.75%");
        assert_eq!(percent(0.0), "0.00%");
    }

    #[test]
    fn test_prompt_embeds_tables_and_rates() {
        let params = ScenarioParams {
            inflation_rate: 0.035,
            ..Default::default()
        };
        let outcome = run_scenario(
            &[FinancingRecord::public(2020, 100.0)],
            &[FinancingRecord::private(2020, 50.0)],
            &params,
        )
        .unwrap();

        let prompt = StrategyPrompt::build(&outcome, &params, DEFAULT_REGION).unwrap();

        assert!(prompt.user.contains("Projected data for France"));
        assert!(prompt.user.contains(r#"{"year":2021,"projected_value":153.0}"#));
        assert!(prompt.user.contains(r#"{"year":2020,"debt_to_gdp_ratio":110.0,"subsidy_level":30.0}"#));
        assert!(prompt.user.contains("GDP growth 1.00%, inflation 3.50%, subsidy reduction 1.00%"));
        assert!(prompt.user.contains("carbon neutrality by 2030"));

        let messages = prompt.messages();
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["content"], prompt.user.as_str());
    }
}
