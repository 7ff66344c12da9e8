use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why a requested date range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeViolation {
    StartAfterEnd,
    ExceedsLimit { max_days: u32 },
}

impl std::fmt::Display for DateRangeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartAfterEnd => f.write_str("start date is after end date"),
            Self::ExceedsLimit { max_days } => {
                write!(f, "range is longer than {max_days} days")
            }
        }
    }
}

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid date range {start} - {end}: {reason}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        reason: DateRangeViolation,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
