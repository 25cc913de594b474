//! Period bucketing
//!
//! Groups daily samples into week or month windows. Every bucket has one
//! entry per calendar day so charts can rely on a fixed-length series:
//! 7 entries for a week, `days_in_month` entries for a month.

use crate::dates::{
    add_days, add_months, end_of_month, parse_date_key, start_of_month, start_of_week,
    week_start_from_index,
};
use crate::errors::ReportResult;
use crate::models::{Aggregate, DailySample, Granularity, PeriodBucket};
use crate::validation::validate_sample;
use chrono::{NaiveDate, Weekday};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Inclusive bounds of the period containing `reference`
pub fn period_bounds(
    granularity: Granularity,
    reference: NaiveDate,
    week_start: Weekday,
) -> ReportResult<(NaiveDate, NaiveDate)> {
    match granularity {
        Granularity::Week => {
            let start = start_of_week(reference, week_start)?;
            Ok((start, add_days(start, 6)?))
        }
        Granularity::Month => Ok((start_of_month(reference), end_of_month(reference))),
    }
}

/// Reference date of the period immediately before the one containing `reference`
pub fn previous_reference(granularity: Granularity, reference: NaiveDate) -> ReportResult<NaiveDate> {
    match granularity {
        Granularity::Week => add_days(reference, -7),
        Granularity::Month => add_months(reference, -1),
    }
}

/// Build the bucket of the period containing `reference`.
///
/// Samples outside the window are ignored. Missing days become placeholders.
/// When two samples share a date the later one in `samples` wins.
pub fn bucket(
    samples: &[DailySample],
    granularity: Granularity,
    reference: NaiveDate,
    week_start: Weekday,
) -> ReportResult<PeriodBucket> {
    let (start, end) = period_bounds(granularity, reference, week_start)?;

    let mut by_date: BTreeMap<NaiveDate, &DailySample> = BTreeMap::new();
    for sample in samples.iter().filter(|s| s.date >= start && s.date <= end) {
        validate_sample(sample)?;
        if by_date.insert(sample.date, sample).is_some() {
            warn!(date = %sample.date_key(), "Duplicate sample for date, keeping the later one");
        }
    }

    let mut days = Vec::with_capacity((end - start).num_days() as usize + 1);
    let mut day = start;
    loop {
        days.push(
            by_date
                .get(&day)
                .map(|sample| (*sample).clone())
                .unwrap_or_else(|| DailySample::placeholder(day)),
        );
        if day >= end {
            break;
        }
        day = add_days(day, 1)?;
    }

    let aggregate = Aggregate::from_samples(&days);

    debug!(
        %granularity,
        start = %start,
        end = %end,
        recorded_days = aggregate.recorded_days,
        "Built period bucket"
    );

    Ok(PeriodBucket {
        granularity,
        start_date: start,
        end_date: end,
        samples: days,
        aggregate,
    })
}

/// Build a bucket from caller-supplied tokens.
///
/// `granularity` is `week` or `month`, `reference` a `YYYY-MM-DD` key and
/// `week_start_day` an index with Sunday = 0.
pub fn bucket_from_tokens(
    samples: &[DailySample],
    granularity: &str,
    reference: &str,
    week_start_day: u8,
) -> ReportResult<PeriodBucket> {
    let granularity: Granularity = granularity.parse()?;
    let reference = parse_date_key(reference)?;
    let week_start = week_start_from_index(week_start_day)?;
    bucket(samples, granularity, reference, week_start)
}

/// The last `count` consecutive buckets ending with the period containing
/// `reference`, oldest first
pub fn bucket_series(
    samples: &[DailySample],
    granularity: Granularity,
    reference: NaiveDate,
    week_start: Weekday,
    count: usize,
) -> ReportResult<Vec<PeriodBucket>> {
    let mut references = Vec::with_capacity(count);
    let mut current = reference;
    for index in 0..count {
        references.push(current);
        if index + 1 < count {
            current = previous_reference(granularity, current)?;
        }
    }

    references
        .into_iter()
        .rev()
        .map(|reference| bucket(samples, granularity, reference, week_start))
        .collect()
}

impl PeriodBucket {
    /// Bucket of the period right before this one
    pub fn previous(
        &self,
        samples: &[DailySample],
        week_start: Weekday,
    ) -> ReportResult<PeriodBucket> {
        let reference = previous_reference(self.granularity, self.start_date)?;
        bucket(samples, self.granularity, reference, week_start)
    }
}
