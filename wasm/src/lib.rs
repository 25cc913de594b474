//! Weight Tracker WASM Module
//!
//! WebAssembly bindings for the reports engine. Structured values cross
//! the boundary as JSON strings; errors are thrown as JS strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use weight_tracker_shared::{
    bucket_from_tokens, compare, compute_scale, dates, goal_progress as progress,
    reports::build_report, Aggregate, DailySample, Granularity, Locale, ReportError,
    ReportSettings,
};

/// Bucket samples for the period containing `reference` (`YYYY-MM-DD`)
#[wasm_bindgen]
pub fn bucket_samples(
    samples_json: &str,
    granularity: &str,
    reference: &str,
    week_start_day: u8,
) -> Result<String, JsValue> {
    bucket_samples_json(samples_json, granularity, reference, week_start_day).map_err(to_js)
}

/// Compare two aggregates
#[wasm_bindgen]
pub fn compare_periods(current_json: &str, previous_json: &str) -> Result<String, JsValue> {
    compare_periods_json(current_json, previous_json).map_err(to_js)
}

/// Y axis labels and bar geometry for a daily series
#[wasm_bindgen]
pub fn compute_chart_scale(
    series: &[f64],
    goal: f64,
    num_labels: usize,
    container_height: f64,
) -> Result<String, JsValue> {
    chart_scale_json(series, goal, num_labels, container_height).map_err(to_js)
}

/// Full period report; `settings_json` may be empty for defaults
#[wasm_bindgen]
pub fn period_report(
    samples_json: &str,
    settings_json: &str,
    granularity: &str,
    reference: &str,
) -> Result<String, JsValue> {
    period_report_json(samples_json, settings_json, granularity, reference).map_err(to_js)
}

/// Localized label of a date range, e.g. `3 - 9 March`
#[wasm_bindgen]
pub fn format_range(start: &str, end: &str, locale: &str) -> Result<String, JsValue> {
    format_range_label(start, end, locale).map_err(to_js)
}

/// Progress ring geometry for a value and its goal
#[wasm_bindgen]
pub fn goal_progress(value: f64, goal: f64) -> Result<String, JsValue> {
    to_json(&progress(value, goal)).map_err(to_js)
}

fn to_js(err: ReportError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    serde_json::to_string(value).map_err(|e| ReportError::Serialization(e.to_string()))
}

fn parse_samples(samples_json: &str) -> Result<Vec<DailySample>, ReportError> {
    serde_json::from_str(samples_json)
        .map_err(|e| ReportError::Malformed(format!("samples: {}", e)))
}

fn bucket_samples_json(
    samples_json: &str,
    granularity: &str,
    reference: &str,
    week_start_day: u8,
) -> Result<String, ReportError> {
    let samples = parse_samples(samples_json)?;
    let bucket = bucket_from_tokens(&samples, granularity, reference, week_start_day)?;
    to_json(&bucket)
}

fn compare_periods_json(current_json: &str, previous_json: &str) -> Result<String, ReportError> {
    let parse = |json: &str| -> Result<Aggregate, ReportError> {
        serde_json::from_str(json)
            .map_err(|e| ReportError::Malformed(format!("aggregate: {}", e)))
    };
    to_json(&compare(&parse(current_json)?, &parse(previous_json)?))
}

#[derive(Serialize)]
struct ScaleWithBars {
    #[serde(flatten)]
    scale: weight_tracker_shared::ChartScale,
    bars: Vec<weight_tracker_shared::ChartBar>,
}

fn chart_scale_json(
    series: &[f64],
    goal: f64,
    num_labels: usize,
    container_height: f64,
) -> Result<String, ReportError> {
    let scale = compute_scale(series, goal, num_labels)?;
    let bars = scale.bars(series, goal, container_height);
    to_json(&ScaleWithBars { scale, bars })
}

fn period_report_json(
    samples_json: &str,
    settings_json: &str,
    granularity: &str,
    reference: &str,
) -> Result<String, ReportError> {
    let samples = parse_samples(samples_json)?;
    let settings: ReportSettings = if settings_json.trim().is_empty() {
        ReportSettings::default()
    } else {
        serde_json::from_str(settings_json)
            .map_err(|e| ReportError::Malformed(format!("settings: {}", e)))?
    };
    let granularity: Granularity = granularity.parse()?;
    let reference = dates::parse_date_key(reference)?;
    to_json(&build_report(&samples, granularity, reference, &settings)?)
}

fn format_range_label(start: &str, end: &str, locale: &str) -> Result<String, ReportError> {
    let start = dates::parse_date_key(start)?;
    let end = dates::parse_date_key(end)?;
    Ok(dates::format_date_range(start, end, Locale::from_tag(locale)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_bucket_samples_json() {
        let samples = r#"[{"date":"2024-03-04","steps":1000},{"date":"2024-03-08","steps":2000}]"#;
        let json = bucket_samples_json(samples, "week", "2024-03-06", 0).unwrap();
        let bucket: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(bucket["samples"].as_array().unwrap().len(), 7);
        assert_eq!(bucket["aggregate"]["steps"], 3000.0);
        assert_eq!(bucket["start_date"], "2024-03-03");
    }

    #[test]
    fn test_bucket_samples_rejects_bad_tokens() {
        assert!(matches!(
            bucket_samples_json("[]", "year", "2024-03-06", 0),
            Err(ReportError::InvalidGranularity(_))
        ));
        assert!(matches!(
            bucket_samples_json("[]", "week", "not-a-date", 0),
            Err(ReportError::InvalidRange(_))
        ));
        assert!(matches!(
            bucket_samples_json("{", "week", "2024-03-06", 0),
            Err(ReportError::Malformed(_))
        ));
    }

    #[test]
    fn test_compare_periods_json() {
        let json = compare_periods_json(r#"{"steps":8000}"#, r#"{"steps":4000}"#).unwrap();
        let comparisons: Value = serde_json::from_str(&json).unwrap();
        let steps = comparisons
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["metric"] == "steps")
            .unwrap();
        assert_eq!(steps["change_percent"], 100.0);
        assert_eq!(steps["direction"], "increase");
    }

    #[test]
    fn test_chart_scale_json() {
        let json = chart_scale_json(&[0.0; 7], 300.0, 5, 100.0).unwrap();
        let scale: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(scale["max_value"], 400.0);
        assert_eq!(scale["bars"].as_array().unwrap().len(), 7);
        assert!(chart_scale_json(&[], 0.0, 1, 100.0).is_err());
    }

    #[test]
    fn test_period_report_json_defaults() {
        let json = period_report_json("[]", "", "month", "2024-04-10").unwrap();
        let report: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(report["current"]["samples"].as_array().unwrap().len(), 30);
        assert_eq!(report["range_label"], "1 - 30 April");
    }

    #[test]
    fn test_malformed_input_is_distinct_from_validation() {
        assert!(matches!(
            compare_periods_json("not json", "{}"),
            Err(ReportError::Malformed(_))
        ));
        assert!(matches!(
            period_report_json("[]", "{\"chart_labels\":", "week", "2024-03-06"),
            Err(ReportError::Malformed(_))
        ));
        assert!(matches!(
            period_report_json("[]", r#"{"chart_labels":1}"#, "week", "2024-03-06"),
            Err(ReportError::Validation(_))
        ));
    }

    #[test]
    fn test_chart_scale_json_rejects_too_many_labels() {
        assert!(matches!(
            chart_scale_json(&[100.0], 0.0, usize::MAX, 100.0),
            Err(ReportError::InvalidLabelCount(_))
        ));
    }

    #[test]
    fn test_format_range_label() {
        assert_eq!(
            format_range_label("2024-02-25", "2024-03-02", "en-US").unwrap(),
            "25 February - 2 March"
        );
        assert_eq!(
            format_range_label("2024-03-02", "2024-03-08", "ar").unwrap(),
            "٢ - ٨ مارس"
        );
    }
}
