//! Error types for evaluator construction and formatting.
//!
//! Resolution never produces an error: missing or non-traversable data
//! degrades to [`Value::Null`](crate::value::Value::Null). Everything here is
//! either a configuration problem (raised while building a component) or a
//! parse problem raised while formatting a value.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required collaborator was explicitly left out of the evaluator.
    #[error("{0} is required")]
    MissingCollaborator(&'static str),

    #[error("keep_last cannot be negative ({0})")]
    NegativeMaskLength(i64),

    #[error("decimal places cannot be negative ({0})")]
    InvalidDecimalPlaces(i64),

    /// A configured strftime string contains an unknown specifier.
    #[error("invalid date format: \"{format}\"")]
    InvalidDateFormat { format: String },

    #[error("invalid formatter options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("cannot parse \"{value}\" as a date with format \"{format}\"")]
    DateParse {
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("cannot format \"{value}\" as a number")]
    InvalidNumber { value: String },

    /// The thousands pattern hit a matcher limit (e.g. backtracking).
    #[error("thousands pattern failed: {0}")]
    ThousandsPattern(#[from] fancy_regex::Error),
}
