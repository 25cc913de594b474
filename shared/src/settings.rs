//! Report display settings
//!
//! Locale and week start are carried here and passed down explicitly.

use crate::dates::week_start_from_index;
use crate::errors::ReportResult;
use crate::locale::Locale;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for building reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportSettings {
    pub locale: Locale,
    /// First day of the week, Sunday = 0. Falls back to the locale default.
    #[validate(range(max = 6))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start_day: Option<u8>,
    /// Number of Y axis labels on activity charts
    #[validate(range(min = 2, max = 12))]
    pub chart_labels: usize,
    #[validate(range(min = 1, max = 200000))]
    pub daily_step_goal: u32,
    /// Height of the chart drawing area, in layout units
    #[validate(range(min = 1.0))]
    pub chart_height: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            week_start_day: None,
            chart_labels: 5,
            daily_step_goal: 10_000,
            chart_height: 200.0,
        }
    }
}

impl ReportSettings {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Configured first day of the week, or the locale's default
    pub fn week_start(&self) -> ReportResult<Weekday> {
        match self.week_start_day {
            Some(index) => week_start_from_index(index),
            None => Ok(self.locale.default_week_start()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ReportSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.week_start().unwrap(), Weekday::Sun);
        assert_eq!(settings.chart_labels, 5);
    }

    #[test]
    fn test_locale_week_start() {
        let settings = ReportSettings::for_locale(Locale::Arabic);
        assert_eq!(settings.week_start().unwrap(), Weekday::Sat);

        let settings = ReportSettings {
            week_start_day: Some(1),
            ..ReportSettings::for_locale(Locale::Arabic)
        };
        assert_eq!(settings.week_start().unwrap(), Weekday::Mon);
    }

    #[test]
    fn test_invalid_settings() {
        let settings = ReportSettings {
            week_start_day: Some(7),
            ..ReportSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ReportSettings {
            chart_labels: 1,
            ..ReportSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ReportSettings {
            chart_height: 0.0,
            ..ReportSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_chart_label_bounds_match_chart_scale() {
        use crate::chart_scale::{MAX_CHART_LABELS, MIN_CHART_LABELS};

        for (chart_labels, valid) in [
            (MIN_CHART_LABELS, true),
            (MAX_CHART_LABELS, true),
            (MAX_CHART_LABELS + 1, false),
        ] {
            let settings = ReportSettings {
                chart_labels,
                ..ReportSettings::default()
            };
            assert_eq!(settings.validate().is_ok(), valid);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ReportSettings = serde_json::from_str(r#"{"locale":"ar"}"#).unwrap();
        assert_eq!(settings.locale, Locale::Arabic);
        assert_eq!(settings.daily_step_goal, 10_000);
        assert_eq!(settings.week_start_day, None);
    }
}
