//! Weight Tracker Report Library
//!
//! Command line front end of the reports engine: loads samples from a
//! file, builds the period report, and renders it as JSON or CSV.

pub mod args;
pub mod config;
pub mod error;
pub mod import;

use crate::args::Args;
use crate::config::{AppConfig, OutputFormat};
use crate::error::CliResult;
use chrono::NaiveDate;
use tracing::info;
use weight_tracker_shared::{build_report, PeriodReport};

/// Load the samples named by `args` and build their report.
/// `today` is used when no `--date` was given.
pub fn generate(args: &Args, config: &AppConfig, today: NaiveDate) -> CliResult<PeriodReport> {
    let samples = import::read_samples(&args.samples_path)?;
    if config.import.check_ranges {
        import::check_ranges(&samples)?;
    }
    let reference = args.reference.unwrap_or(today);

    let report = build_report(&samples, args.granularity, reference, &config.report)?;

    info!(
        granularity = %report.granularity,
        start = %report.current.start_date,
        end = %report.current.end_date,
        recorded_days = report.current.aggregate.recorded_days,
        "Report generated"
    );
    Ok(report)
}

/// Render a report in the configured output format
pub fn render(report: &PeriodReport, config: &AppConfig) -> CliResult<String> {
    match config.output.format {
        OutputFormat::Json if config.output.pretty => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => {
            let mut out = Vec::new();
            import::write_csv(&mut out, &report.current.samples)?;
            Ok(String::from_utf8_lossy(&out).into_owned())
        }
    }
}

/// Generate and render in one step
pub fn run(args: &Args, config: &AppConfig, today: NaiveDate) -> CliResult<String> {
    let report = generate(args, config, today)?;
    render(&report, config)
}
