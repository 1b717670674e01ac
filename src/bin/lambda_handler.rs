//! AWS Lambda handler for running a green finance scenario
//!
//! Accepts the two financing datasets and scenario parameters as JSON and returns the three
//! result tables plus the strategy recommendation request text.
//!
//! Supports Lambda Function URLs: a payload carrying a string `body` is treated as an HTTP
//! invocation and answered with `statusCode`/`headers`/`body`.

use green_finance::financing::{records_from_json, FundingSource};
use green_finance::report::{prompt::DEFAULT_REGION, StrategyPrompt};
use green_finance::scenario::ScenarioSummary;
use green_finance::{run_scenario, ScenarioOutcome, ScenarioParams};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Input document
#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    /// Public financing rows, e.g. `{"year": 2020, "amount": 100}`
    #[serde(default)]
    pub public: Vec<Value>,

    /// Private financing rows
    #[serde(default)]
    pub private: Vec<Value>,

    /// Scenario parameters; missing fields take their defaults
    #[serde(default)]
    pub params: ScenarioParams,

    /// Region named in the recommendation request
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String { DEFAULT_REGION.to_string() }

/// Output document
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub params: ScenarioParams,
    pub summary: Option<ScenarioSummary>,
    pub outcome: ScenarioOutcome,
    pub prompt: StrategyPrompt,
    pub execution_time_ms: u64,
}

fn handle(request: ScenarioRequest) -> green_finance::Result<ScenarioResponse> {
    let start = Instant::now();

    let public = records_from_json(&request.public, FundingSource::Public)?;
    let private = records_from_json(&request.private, FundingSource::Private)?;
    let outcome = run_scenario(&public, &private, &request.params)?;
    let prompt = StrategyPrompt::build(&outcome, &request.params, &request.region)?;

    Ok(ScenarioResponse {
        params: request.params,
        summary: outcome.summary(),
        outcome,
        prompt,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Split a raw event into the request document and whether it came through a Function URL
fn parse_event(payload: Value) -> (Result<ScenarioRequest, serde_json::Error>, bool) {
    match payload.get("body").and_then(Value::as_str) {
        Some(body) => (serde_json::from_str(body), true),
        None => (serde_json::from_value(payload), false),
    }
}

fn error_body(kind: &str, message: &str) -> Value {
    json!({ "error": { "kind": kind, "message": message } })
}

fn http_response(status: u16, body: &Value) -> Value {
    json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": body.to_string(),
    })
}

/// Lambda handler function
async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, _context) = event.into_parts();
    let (request, via_url) = parse_event(payload);

    let (status, body) = match request {
        Err(err) => {
            warn!("rejected malformed request: {}", err);
            (400, error_body("InvalidRequest", &err.to_string()))
        }
        Ok(request) => match handle(request) {
            Ok(response) => (200, serde_json::to_value(&response)?),
            Err(err) => {
                warn!("scenario failed: {}", err);
                (422, error_body(err.kind(), &err.to_string()))
            }
        },
    };

    if via_url {
        Ok(http_response(status, &body))
    } else {
        Ok(body)
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
