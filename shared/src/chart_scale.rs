//! Activity chart geometry
//!
//! Computes a shared Y axis with human-friendly gridlines and the height of
//! each bar for the daily activity charts.

use crate::errors::{ReportError, ReportResult};
use crate::models::{Metric, PeriodBucket};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Axis maximum is rounded up to a multiple of this
const AXIS_ROUNDING: f64 = 100.0;

/// Gridline increments are rounded up to a multiple of this
const STEP_ROUNDING: f64 = 50.0;

/// Fewest gridline labels a chart can draw
pub const MIN_CHART_LABELS: usize = 2;

/// Most gridline labels a chart can draw
pub const MAX_CHART_LABELS: usize = 12;

/// Y axis of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScale {
    /// Gridline labels, ascending, exactly `num_labels` entries
    pub labels: Vec<f64>,
    /// Value at the top of the chart
    pub max_value: f64,
    /// Distance between gridlines
    pub step_size: f64,
}

/// Geometry of one bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub value: f64,
    pub height: f64,
    /// Drawn with the "goal reached" style
    pub achieved_goal: bool,
}

/// Compute the axis for a series and its goal line.
///
/// The top of the axis covers the largest value and the goal, rounded up to
/// a hundred; gridlines are spaced by a multiple of fifty. Non-finite
/// values and a non-finite goal are ignored.
pub fn compute_scale(series: &[f64], goal: f64, num_labels: usize) -> ReportResult<ChartScale> {
    if !(MIN_CHART_LABELS..=MAX_CHART_LABELS).contains(&num_labels) {
        return Err(ReportError::InvalidLabelCount(num_labels));
    }
    let intervals = (num_labels - 1) as f64;
    let goal = if goal.is_finite() { goal } else { 0.0 };

    let data_max = series
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let practical_max = data_max.max(goal).max(1.0);
    let rounded_max = ((practical_max / AXIS_ROUNDING).ceil() * AXIS_ROUNDING).max(AXIS_ROUNDING);
    let step_size =
        ((rounded_max / intervals / STEP_ROUNDING).ceil() * STEP_ROUNDING).max(STEP_ROUNDING);
    let max_value = (step_size * intervals).max(1.0);

    let mut labels: Vec<f64> = (0..num_labels)
        .map(|i| (i as f64 * max_value / intervals).round())
        .collect();
    labels.sort_by(f64::total_cmp);
    labels.dedup();
    while labels.len() < num_labels {
        labels.insert(0, 0.0);
    }
    labels.truncate(num_labels);

    Ok(ChartScale {
        labels,
        max_value,
        step_size,
    })
}

/// Height of a bar, clamped to `[0, container_height]`
pub fn bar_height(value: f64, container_height: f64, max_value: f64) -> f64 {
    if max_value <= 0.0 || container_height <= 0.0 {
        return 0.0;
    }
    (value * container_height / max_value)
        .max(0.0)
        .min(container_height)
}

/// Whether a value reaches a positive goal
pub fn reaches_goal(value: f64, goal: f64) -> bool {
    goal > 0.0 && value >= goal
}

impl ChartScale {
    /// Bars for a series drawn on this axis
    pub fn bars(&self, series: &[f64], goal: f64, container_height: f64) -> Vec<ChartBar> {
        series
            .iter()
            .map(|&value| ChartBar {
                value,
                height: bar_height(value, container_height, self.max_value),
                achieved_goal: reaches_goal(value, goal),
            })
            .collect()
    }

    /// Height of the goal line
    pub fn goal_height(&self, goal: f64, container_height: f64) -> f64 {
        bar_height(goal, container_height, self.max_value)
    }
}

/// One day of an activity chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDay {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub bar: ChartBar,
}

/// Daily bar chart of one metric over a bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityChart {
    pub metric: Metric,
    pub goal: f64,
    pub goal_height: f64,
    pub scale: ChartScale,
    pub days: Vec<ChartDay>,
}

impl ActivityChart {
    /// Days that reached the goal
    pub fn achieved_days(&self) -> usize {
        self.days.iter().filter(|d| d.bar.achieved_goal).count()
    }
}

/// Build the chart of a bucket's daily values
pub fn activity_chart(
    bucket: &PeriodBucket,
    metric: Metric,
    goal: f64,
    num_labels: usize,
    container_height: f64,
) -> ReportResult<ActivityChart> {
    let series = bucket.daily_values(metric);
    let scale = compute_scale(&series, goal, num_labels)?;
    let days = bucket
        .samples
        .iter()
        .zip(scale.bars(&series, goal, container_height))
        .map(|(sample, bar)| ChartDay {
            date: sample.date,
            bar,
        })
        .collect();

    Ok(ActivityChart {
        metric,
        goal,
        goal_height: scale.goal_height(goal, container_height),
        scale,
        days,
    })
}
