//! Period reports
//!
//! Combines the current and previous buckets, their comparison, and the
//! step chart into the structure the reports and calories screens render.

use crate::bucketing::{bucket, previous_reference};
use crate::chart_scale::{activity_chart, ActivityChart};
use crate::comparison::{compare, MetricComparison};
use crate::dates::format_date_range;
use crate::errors::ReportResult;
use crate::locale::Locale;
use crate::models::{DailySample, Granularity, Metric, PeriodBucket};
use crate::progress::{goal_progress, GoalProgress};
use crate::settings::ReportSettings;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

/// Everything a report screen shows for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub granularity: Granularity,
    pub locale: Locale,
    /// Localized label of the current window, e.g. `3 - 9 March`
    pub range_label: String,
    pub current: PeriodBucket,
    pub previous: PeriodBucket,
    pub comparisons: Vec<MetricComparison>,
    /// Steps per active day in the current window
    pub average_daily_steps: f64,
    /// Progress of the average day towards the step goal
    pub step_goal_progress: GoalProgress,
    pub steps_chart: ActivityChart,
}

/// Build the report of the period containing `reference`
pub fn build_report(
    samples: &[DailySample],
    granularity: Granularity,
    reference: NaiveDate,
    settings: &ReportSettings,
) -> ReportResult<PeriodReport> {
    settings.validate()?;
    let week_start = settings.week_start()?;

    let current = bucket(samples, granularity, reference, week_start)?;
    let previous = bucket(
        samples,
        granularity,
        previous_reference(granularity, reference)?,
        week_start,
    )?;

    let comparisons = compare(&current.aggregate, &previous.aggregate);
    let goal = f64::from(settings.daily_step_goal);
    let average_daily_steps = current.aggregate.daily_average(Metric::Steps);
    let steps_chart = activity_chart(
        &current,
        Metric::Steps,
        goal,
        settings.chart_labels,
        settings.chart_height,
    )?;

    debug!(
        %granularity,
        reference = %reference,
        recorded_days = current.aggregate.recorded_days,
        previous_recorded_days = previous.aggregate.recorded_days,
        "Built period report"
    );

    Ok(PeriodReport {
        granularity,
        locale: settings.locale,
        range_label: format_date_range(current.start_date, current.end_date, settings.locale),
        average_daily_steps,
        step_goal_progress: goal_progress(average_daily_steps, goal),
        current,
        previous,
        comparisons,
        steps_chart,
    })
}
