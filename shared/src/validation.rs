//! Input validation for daily samples
//!
//! Every recorded measurement must be a finite, non-negative number; the
//! bucketer enforces only that. The per-metric plausibility ranges are an
//! opt-in check for importers.
//! Settings are validated with the `validator` derive in `settings`.

use crate::errors::{ReportError, ReportResult};
use crate::models::{DailySample, Metric};

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    validate_range(weight_kg, 20.0, 500.0, "Weight must be between 20 and 500 kg")
}

/// Validate daily step count
pub fn validate_steps(steps: f64) -> Result<(), String> {
    validate_range(steps, 0.0, 200_000.0, "Steps must be between 0 and 200000")
}

/// Validate daily distance (in km)
pub fn validate_distance_km(distance_km: f64) -> Result<(), String> {
    validate_range(distance_km, 0.0, 1_000.0, "Distance must be between 0 and 1000 km")
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    validate_range(calories, 0.0, 50_000.0, "Calories must be between 0 and 50000")
}

/// Validate active minutes in one day
pub fn validate_active_minutes(minutes: f64) -> Result<(), String> {
    // 24 hours
    validate_range(minutes, 0.0, 1_440.0, "Active minutes cannot exceed 24 hours")
}

/// Validate daily water intake (in ml)
pub fn validate_water_ml(water_ml: f64) -> Result<(), String> {
    validate_range(water_ml, 0.0, 20_000.0, "Water must be between 0 and 20000 ml")
}

fn validate_range(value: f64, min: f64, max: f64, message: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Value must be a valid number".to_string());
    }
    if value < min || value > max {
        return Err(message.to_string());
    }
    Ok(())
}

/// Validate that a reading is a finite, non-negative number
pub fn validate_reading(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Value must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("Value cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a single measurement against its plausible range
pub fn validate_measurement(metric: Metric, value: f64) -> Result<(), String> {
    match metric {
        Metric::Weight => validate_weight(value),
        Metric::Steps => validate_steps(value),
        Metric::Distance => validate_distance_km(value),
        Metric::Calories => validate_calories(value),
        Metric::ActiveMinutes => validate_active_minutes(value),
        Metric::Water => validate_water_ml(value),
    }
}

/// Validate every recorded measurement of a sample.
///
/// Reports the first negative or non-finite value as `<date>: <field>: <message>`.
pub fn validate_sample(sample: &DailySample) -> ReportResult<()> {
    check_each(sample, |_, value| validate_reading(value))
}

/// Check every recorded measurement of a sample against its plausible range
pub fn check_plausible(sample: &DailySample) -> ReportResult<()> {
    check_each(sample, validate_measurement)
}

fn check_each<F>(sample: &DailySample, check: F) -> ReportResult<()>
where
    F: Fn(Metric, f64) -> Result<(), String>,
{
    for metric in Metric::ALL {
        if let Some(value) = sample.value(metric) {
            check(metric, value).map_err(|message| {
                ReportError::InvalidSample(format!(
                    "{}: {}: {}",
                    sample.date_key(),
                    metric.field_name(),
                    message
                ))
            })?;
        }
    }
    Ok(())
}
