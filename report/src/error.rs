//! Error handling for the report tool

use thiserror::Error;
use weight_tracker_shared::ReportError;

/// Errors surfaced by the report command
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Config(_) | CliError::InvalidConfig(_) => 78,
            _ => 1,
        }
    }
}

/// Result type alias for the report tool
pub type CliResult<T> = Result<T, CliError>;
