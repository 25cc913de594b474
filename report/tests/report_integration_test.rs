//! Integration tests for the report command

mod common;

use chrono::NaiveDate;
use common::{args_for, config_from, Fixture, WEEK_CSV};
use serde_json::Value;
use weight_tracker_report::{
    config::{AppConfig, OutputFormat},
    error::CliError,
    generate, run,
};
use weight_tracker_shared::{Granularity, Locale, ReportError};

fn comparison<'a>(report: &'a Value, metric: &str) -> &'a Value {
    report["comparisons"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["metric"] == metric)
        .unwrap()
}

#[test]
fn test_weekly_report_from_csv() {
    let samples = Fixture::new("csv", WEEK_CSV);
    let args = args_for(samples.path(), Granularity::Week, "2024-03-06");

    let output = run(&args, &AppConfig::default(), NaiveDate::MIN).unwrap();
    let report: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["granularity"], "week");
    assert_eq!(report["range_label"], "3 - 9 March");
    assert_eq!(report["current"]["start_date"], "2024-03-03");
    assert_eq!(report["current"]["end_date"], "2024-03-09");
    assert_eq!(report["current"]["samples"].as_array().unwrap().len(), 7);
    assert_eq!(report["current"]["aggregate"]["steps"], 8000.0);
    assert_eq!(report["average_daily_steps"], 1600.0);

    let steps = comparison(&report, "steps");
    assert_eq!(steps["current"], 8000.0);
    assert_eq!(steps["previous"], 4000.0);
    assert_eq!(steps["change_percent"], 100.0);
    assert_eq!(steps["direction"], "increase");

    let weight = comparison(&report, "weight");
    assert_eq!(weight["direction"], "decrease");
}

#[test]
fn test_reference_defaults_to_today() {
    let samples = Fixture::new("csv", WEEK_CSV);
    let mut args = args_for(samples.path(), Granularity::Week, "2024-03-06");
    args.reference = None;
    let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

    let report = generate(&args, &AppConfig::default(), today).unwrap();

    assert_eq!(report.current.start_date, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    assert_eq!(report.current.aggregate.steps, 8000.0);
}

#[test]
fn test_monthly_report_from_json() {
    let samples = Fixture::new(
        "json",
        r#"[
            {"date": "2024-02-01", "steps": 3000, "water_ml": 1500},
            {"date": "2024-02-29", "steps": 5000},
            {"date": "2024-01-15", "steps": 2000}
        ]"#,
    );
    let args = args_for(samples.path(), Granularity::Month, "2024-02-10");

    let report = generate(&args, &AppConfig::default(), NaiveDate::MIN).unwrap();

    assert_eq!(report.current.samples.len(), 29);
    assert_eq!(report.current.aggregate.steps, 8000.0);
    assert_eq!(report.current.aggregate.water_ml, 1500.0);
    assert_eq!(report.previous.samples.len(), 31);
    assert_eq!(report.previous.aggregate.steps, 2000.0);
    assert_eq!(report.range_label, "1 - 29 February");
}

#[test]
fn test_arabic_locale_from_config_file() {
    let config = config_from("[report]\nlocale = \"ar\"\n");
    assert_eq!(config.report.locale, Locale::Arabic);

    let samples = Fixture::new("csv", WEEK_CSV);
    let args = args_for(samples.path(), Granularity::Week, "2024-03-06");
    let report = generate(&args, &config, NaiveDate::MIN).unwrap();

    // Arabic weeks start on Saturday
    assert_eq!(report.current.start_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    assert_eq!(report.current.end_date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
    assert_eq!(report.range_label, "٢ - ٨ مارس");
}

#[test]
fn test_csv_output_lists_current_days() {
    let config = config_from("[output]\nformat = \"csv\"\n");
    assert_eq!(config.output.format, OutputFormat::Csv);

    let samples = Fixture::new("csv", WEEK_CSV);
    let args = args_for(samples.path(), Granularity::Week, "2024-03-06");
    let output = run(&args, &config, NaiveDate::MIN).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "date,weight_kg,steps,distance_km,calories_burned,active_minutes,water_ml"
    );
    assert!(lines[1].starts_with("2024-03-03,"));
    assert!(lines[7].starts_with("2024-03-09,"));
}

#[test]
fn test_compact_json_output() {
    let config = config_from("[output]\npretty = false\n");
    let samples = Fixture::new("csv", WEEK_CSV);
    let args = args_for(samples.path(), Granularity::Week, "2024-03-06");

    let output = run(&args, &config, NaiveDate::MIN).unwrap();
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn test_invalid_settings_are_rejected_on_load() {
    let file = Fixture::new("toml", "[report]\nchart_labels = 1\n");
    assert!(matches!(
        AppConfig::load(Some(file.path())),
        Err(CliError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let path = std::env::temp_dir().join("weight-tracker-report-missing.toml");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(CliError::Config(_))
    ));
}

#[test]
fn test_out_of_range_sample_in_window() {
    let samples = Fixture::new("csv", "date,steps\n2024-03-05,-5\n");
    let args = args_for(samples.path(), Granularity::Week, "2024-03-06");

    let result = generate(&args, &AppConfig::default(), NaiveDate::MIN);
    assert!(matches!(
        result,
        Err(CliError::Report(ReportError::InvalidSample(_)))
    ));
}

#[test]
fn test_missing_samples_file() {
    let path = std::env::temp_dir().join("weight-tracker-report-missing.csv");
    let args = args_for(&path, Granularity::Week, "2024-03-06");

    let result = generate(&args, &AppConfig::default(), NaiveDate::MIN);
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_implausible_readings_need_opt_in_to_fail() {
    let samples = Fixture::new(
        "csv",
        "date,weight_kg,water_ml\n2024-03-04,,25000\n2024-03-05,0,\n",
    );
    let args = args_for(samples.path(), Granularity::Week, "2024-03-06");

    let report = generate(&args, &AppConfig::default(), NaiveDate::MIN).unwrap();
    assert_eq!(report.current.aggregate.water_ml, 25_000.0);
    assert_eq!(report.current.aggregate.weight_kg, Some(0.0));

    let strict = config_from("[import]\ncheck_ranges = true\n");
    assert!(matches!(
        generate(&args, &strict, NaiveDate::MIN),
        Err(CliError::Report(ReportError::InvalidSample(_)))
    ));
}
