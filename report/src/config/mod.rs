//! Configuration management for the report tool
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (`--config FILE`, else config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: WT__)

use crate::error::CliResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use validator::Validate;
use weight_tracker_shared::ReportSettings;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Import configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Reject readings outside the per-metric plausible ranges
    #[serde(default)]
    pub check_ranges: bool,
}

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full report as JSON
    #[default]
    Json,
    /// The current period's daily rows as CSV
    Csv,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. `explicit` file, or config/{RUST_ENV}.toml when present
    /// 3. Environment variables with WT__ prefix
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => {
                let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
                config::File::with_name(&format!("config/{}", env)).required(false)
            }
        };

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(file)
            // e.g., WT__REPORT__LOCALE=ar sets report.locale
            .add_source(
                config::Environment::with_prefix("WT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.report.validate()?;
        Ok(config)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weight_tracker_shared::Locale;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.report.locale, Locale::English);
        assert_eq!(config.report.chart_labels, 5);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert!(!config.import.check_ranges);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
