//! Command line arguments

use crate::error::{CliError, CliResult};
use chrono::NaiveDate;
use std::path::PathBuf;
use weight_tracker_shared::{dates, Granularity};

pub const USAGE: &str = "\
Usage: weight-tracker-report <samples.(json|csv)> [OPTIONS]

Options:
  --period <week|month>   Reporting period (default: week)
  --date <YYYY-MM-DD>     Reference date inside the period (default: today)
  --config <FILE>         TOML configuration file
  -h, --help              Print this help";

/// Parsed invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub samples_path: PathBuf,
    pub granularity: Granularity,
    pub reference: Option<NaiveDate>,
    pub config_path: Option<PathBuf>,
}

impl Args {
    /// True when help was requested anywhere on the command line
    pub fn wants_help(args: &[String]) -> bool {
        args.iter().any(|arg| arg == "-h" || arg == "--help")
    }

    /// Parse arguments, excluding the program name
    pub fn parse<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut samples_path = None;
        let mut granularity = Granularity::Week;
        let mut reference = None;
        let mut config_path = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--period" => granularity = value_for(&arg, args.next())?.parse()?,
                "--date" => reference = Some(dates::parse_date_key(&value_for(&arg, args.next())?)?),
                "--config" => config_path = Some(PathBuf::from(value_for(&arg, args.next())?)),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("Unknown option: {}", flag)));
                }
                _ if samples_path.is_some() => {
                    return Err(CliError::Usage(format!("Unexpected argument: {}", arg)));
                }
                _ => samples_path = Some(PathBuf::from(&arg)),
            }
        }

        let samples_path =
            samples_path.ok_or_else(|| CliError::Usage("Missing samples file".to_string()))?;

        Ok(Self {
            samples_path,
            granularity,
            reference,
            config_path,
        })
    }
}

fn value_for(flag: &str, value: Option<String>) -> CliResult<String> {
    value.ok_or_else(|| CliError::Usage(format!("{} requires a value", flag)))
}
