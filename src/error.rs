//! Error types for request validation and data loading

use std::path::PathBuf;
use thiserror::Error;

/// Client-side problems with an inbound goal request.
///
/// These are raised at the request boundary only; the planning engine
/// never sees a request that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("request body is not a valid JSON object: {0}")]
    MalformedBody(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field 'goal_name' must not be empty")]
    EmptyGoalName,

    #[error("field '{field}' must be numeric, got {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("field '{0}' must be a finite number")]
    NotFinite(&'static str),

    #[error("field '{field}' must be a whole number, got {value}")]
    NotInteger { field: &'static str, value: String },

    #[error("field 'annual_roi' must be greater than -1200, got {0}")]
    RateOutOfRange(f64),

    #[error("field 'target_date' must be a YYYY-MM-DD date, got '{0}'")]
    InvalidDate(String),
}

/// Failures outside the planning engine: datasets, config, market data.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("market data unavailable: {0}")]
    MarketData(String),
}

impl PlannerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlannerError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
