//! Error types for the reports engine

use thiserror::Error;

/// Errors returned by the date, bucketing, and chart operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid granularity: {0} (expected week or month)")]
    InvalidGranularity(String),

    #[error("Invalid week start day: {0} (expected 0-6, Sunday = 0)")]
    InvalidWeekStart(u8),

    #[error("Invalid label count: {0} (expected 2-12 labels)")]
    InvalidLabelCount(usize),

    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Input that could not be decoded at all
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<validator::ValidationErrors> for ReportError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ReportError::Validation(errors.to_string())
    }
}

/// Result alias used across the engine
pub type ReportResult<T> = Result<T, ReportError>;
