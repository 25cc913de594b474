//! Weight Tracker Report
//!
//! Prints the week or month report for a file of daily samples.
//!
//! ```text
//! weight-tracker-report samples.csv --period month --date 2024-03-06
//! ```

use anyhow::Result;
use chrono::Local;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weight_tracker_report::{
    args::{Args, USAGE},
    config::AppConfig,
    error::CliError,
    run,
};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if Args::wants_help(&raw) {
        println!("{}", USAGE);
        return Ok(());
    }

    let args = match Args::parse(raw) {
        Ok(args) => args,
        Err(e) => exit_with(e),
    };

    let config = match AppConfig::load(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        samples = %args.samples_path.display(),
        granularity = %args.granularity,
        locale = %config.report.locale,
        "Starting Weight Tracker report"
    );

    match run(&args, &config, Local::now().date_naive()) {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with(e),
    }
    Ok(())
}

fn exit_with(e: CliError) -> ! {
    error!(error = %e, "Report failed");
    if matches!(e, CliError::Usage(_)) {
        eprintln!("{}\n\n{}", e, USAGE);
    } else {
        eprintln!("{}", e);
    }
    process::exit(e.exit_code())
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "weight_tracker_report=info,weight_tracker_shared=info".into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
