//! Error types shared by the computational core and its I/O collaborators

use thiserror::Error;

use crate::financing::FundingSource;

/// Crate result type
pub type Result<T> = std::result::Result<T, GreenFinanceError>;

/// Errors raised while ingesting, computing or exporting a scenario
#[derive(Debug, Error)]
pub enum GreenFinanceError {
    /// A record is missing a required field or carries an unparseable value
    #[error("{dataset} record {row}: field `{field}` {problem}")]
    Schema {
        dataset: FundingSource,
        /// 1-based position of the record within its dataset, 0 for the header row
        row: usize,
        field: &'static str,
        problem: String,
    },

    #[error("no {dataset} financing records supplied")]
    EmptyInput { dataset: FundingSource },

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GreenFinanceError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        GreenFinanceError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Stable error kind name for machine-readable responses
    pub fn kind(&self) -> &'static str {
        match self {
            GreenFinanceError::Schema { .. } => "SchemaError",
            GreenFinanceError::EmptyInput { .. } => "EmptyInputError",
            GreenFinanceError::InvalidParameter { .. } => "InvalidParameterError",
            GreenFinanceError::Io(_) | GreenFinanceError::Csv(_) | GreenFinanceError::Json(_) => {
                "IoError"
            }
        }
    }
}
