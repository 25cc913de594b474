//! Sample import and CSV export
//!
//! Samples come from a JSON array of daily samples or a CSV file with the
//! header `date,weight_kg,steps,distance_km,calories_burned,active_minutes,water_ml`.
//! Empty CSV cells mean the metric was not recorded that day.

use crate::error::{CliError, CliResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};
use weight_tracker_shared::{validation::check_plausible, DailySample};

/// Input format of a samples file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Json,
    Csv,
}

impl SampleFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(SampleFormat::Json),
            Some("csv") => Ok(SampleFormat::Csv),
            _ => Err(CliError::Usage(format!(
                "Unsupported samples file: {} (expected .json or .csv)",
                path.display()
            ))),
        }
    }
}

/// One CSV row. Every column is always written so rows stay aligned.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SampleRow {
    date: NaiveDate,
    #[serde(default)]
    weight_kg: Option<f64>,
    #[serde(default)]
    steps: Option<f64>,
    #[serde(default)]
    distance_km: Option<f64>,
    #[serde(default)]
    calories_burned: Option<f64>,
    #[serde(default)]
    active_minutes: Option<f64>,
    #[serde(default)]
    water_ml: Option<f64>,
}

impl From<SampleRow> for DailySample {
    fn from(row: SampleRow) -> Self {
        DailySample {
            date: row.date,
            weight_kg: row.weight_kg,
            steps: row.steps,
            distance_km: row.distance_km,
            calories_burned: row.calories_burned,
            active_minutes: row.active_minutes,
            water_ml: row.water_ml,
        }
    }
}

impl From<&DailySample> for SampleRow {
    fn from(sample: &DailySample) -> Self {
        SampleRow {
            date: sample.date,
            weight_kg: sample.weight_kg,
            steps: sample.steps,
            distance_km: sample.distance_km,
            calories_burned: sample.calories_burned,
            active_minutes: sample.active_minutes,
            water_ml: sample.water_ml,
        }
    }
}

/// Read samples from a `.json` or `.csv` file
pub fn read_samples(path: &Path) -> CliResult<Vec<DailySample>> {
    let format = SampleFormat::from_path(path)?;
    let samples = match format {
        SampleFormat::Json => parse_json(&fs::read_to_string(path)?)?,
        SampleFormat::Csv => parse_csv(fs::File::open(path)?)?,
    };

    info!(
        path = %path.display(),
        count = samples.len(),
        "Loaded samples"
    );
    Ok(samples)
}

/// Reject samples with readings outside the plausible per-metric ranges
pub fn check_ranges(samples: &[DailySample]) -> CliResult<()> {
    for sample in samples {
        check_plausible(sample)?;
    }
    Ok(())
}

/// Parse a JSON array of samples
pub fn parse_json(input: &str) -> CliResult<Vec<DailySample>> {
    Ok(serde_json::from_str(input)?)
}

/// Parse CSV samples; columns other than `date` may be omitted
pub fn parse_csv<R: Read>(reader: R) -> CliResult<Vec<DailySample>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let samples = reader
        .deserialize::<SampleRow>()
        .map(|row| row.map(DailySample::from))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = samples.len(), "Parsed CSV samples");
    Ok(samples)
}

/// Write samples as CSV with the import header
pub fn write_csv<W: Write>(writer: W, samples: &[DailySample]) -> CliResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for sample in samples {
        writer.serialize(SampleRow::from(sample))?;
    }
    writer.flush()?;
    Ok(())
}
