//! Weight Tracker Shared Library
//!
//! Calendar bucketing and comparison engine behind the reports and
//! calories screens. Everything here is pure and synchronous: callers load
//! the daily samples, this crate turns them into week/month buckets,
//! period-over-period comparisons, and chart geometry.

pub mod bucketing;
pub mod chart_scale;
pub mod comparison;
pub mod dates;
pub mod errors;
pub mod locale;
pub mod models;
pub mod progress;
pub mod reports;
pub mod settings;
pub mod validation;

// Re-export commonly used items
pub use bucketing::{bucket, bucket_from_tokens, bucket_series, period_bounds, previous_reference};
pub use chart_scale::{activity_chart, bar_height, compute_scale, ActivityChart, ChartBar, ChartScale};
pub use comparison::{compare, compare_values, ComparisonResult, Direction, MetricComparison};
pub use errors::*;
pub use locale::Locale;
pub use models::{Aggregate, DailySample, Granularity, Metric, PeriodBucket};
pub use progress::{goal_progress, GoalProgress};
pub use reports::{build_report, PeriodReport};
pub use settings::ReportSettings;
