//! Period-over-period comparison
//!
//! Percent change of each metric between the current period and the one
//! before it.

use crate::models::{Aggregate, Metric};
use serde::{Deserialize, Serialize};

/// Change reported when the previous period had nothing and the current one
/// has activity. A fixed value keeps downstream number formatting finite.
pub const NEW_ACTIVITY_CHANGE_PERCENT: f64 = 100.0;

/// Direction of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Stable,
}

impl Direction {
    /// Classify by sign; only an exact zero is stable
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Direction::Increase
        } else if change_percent < 0.0 {
            Direction::Decrease
        } else {
            Direction::Stable
        }
    }
}

/// Change of one value between two periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub change_percent: f64,
    pub direction: Direction,
}

impl ComparisonResult {
    /// Rounded, signed percentage such as `+12%`, `-5%` or `0%`
    pub fn display_percent(&self) -> String {
        let rounded = self.change_percent.round();
        if rounded > 0.0 {
            format!("+{}%", rounded)
        } else if rounded < 0.0 {
            format!("{}%", rounded)
        } else {
            "0%".to_string()
        }
    }
}

/// Comparison of one metric with the values it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: Metric,
    pub current: f64,
    pub previous: f64,
    #[serde(flatten)]
    pub result: ComparisonResult,
}

/// Compare two values.
///
/// - `previous > 0`: `(current - previous) / previous * 100`
/// - both zero: `0`, stable
/// - `previous == 0` and `current > 0`: `NEW_ACTIVITY_CHANGE_PERCENT`, increase
pub fn compare_values(current: f64, previous: f64) -> ComparisonResult {
    let change_percent = if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        NEW_ACTIVITY_CHANGE_PERCENT
    } else {
        0.0
    };

    ComparisonResult {
        change_percent,
        direction: Direction::from_change(change_percent),
    }
}

/// Compare every metric of two aggregates, in `Metric::ALL` order.
///
/// A missing weight reading counts as zero.
pub fn compare(current: &Aggregate, previous: &Aggregate) -> Vec<MetricComparison> {
    Metric::ALL
        .into_iter()
        .map(|metric| {
            let current = current.value(metric).unwrap_or(0.0);
            let previous = previous.value(metric).unwrap_or(0.0);
            MetricComparison {
                metric,
                current,
                previous,
                result: compare_values(current, previous),
            }
        })
        .collect()
}

/// Find the comparison for one metric
pub fn find(comparisons: &[MetricComparison], metric: Metric) -> Option<&MetricComparison> {
    comparisons.iter().find(|c| c.metric == metric)
}
