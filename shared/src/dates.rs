//! Calendar arithmetic for report periods
//!
//! All functions operate on calendar dates (`NaiveDate`) so a day never
//! shifts because of the timezone the caller runs in. Operations that can
//! leave chrono's supported range return `ReportError::InvalidRange`
//! instead of panicking.

use crate::errors::{ReportError, ReportResult};
use crate::locale::Locale;
use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Weekday,
};

/// Format of date keys used for storage and comparison
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Date Keys
// ============================================================================

/// Key of a calendar day, `YYYY-MM-DD`
pub fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Key of the wall-clock day an instant falls on in its own timezone.
///
/// An instant at 00:30 in UTC+3 is still the previous day in UTC; the key
/// follows the local calendar day.
pub fn to_local_date_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    to_date_key(instant.date_naive())
}

/// Parse a `YYYY-MM-DD` key
pub fn parse_date_key(key: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|e| ReportError::InvalidRange(format!("'{}' is not a valid date: {}", key, e)))
}

// ============================================================================
// Day and Week Arithmetic
// ============================================================================

/// Day-of-week from its index, Sunday = 0 through Saturday = 6
pub fn week_start_from_index(index: u8) -> ReportResult<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ReportError::InvalidWeekStart(other)),
    }
}

/// Index of a weekday, Sunday = 0 through Saturday = 6
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Date `n` days after `date` (`n` may be negative)
pub fn add_days(date: NaiveDate, n: i64) -> ReportResult<NaiveDate> {
    date.checked_add_signed(Duration::days(n)).ok_or_else(|| {
        ReportError::InvalidRange(format!("{} + {} days is out of range", date, n))
    })
}

/// Most recent `week_start` on or before `date`
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> ReportResult<NaiveDate> {
    let day = date.weekday().num_days_from_sunday();
    let start = week_start.num_days_from_sunday();
    let offset = (day + 7 - start) % 7;
    add_days(date, -(offset as i64))
}

/// Last day of the week containing `date`
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> ReportResult<NaiveDate> {
    add_days(start_of_week(date, week_start)?, 6)
}

/// Last representable instant of a calendar day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default())
}

/// Whether two dates fall in the same displayed week
pub fn is_same_week(a: NaiveDate, b: NaiveDate, week_start: Weekday) -> bool {
    match (start_of_week(a, week_start), start_of_week(b, week_start)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

// ============================================================================
// Month Arithmetic
// ============================================================================

/// First day of the month containing `date`
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The day before the first of next month is the last day of this one.
    // Only December of chrono's final year has no next month, and it has 31 days.
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Last day of the month containing `date`
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// Move `n` calendar months, clamping the day to the end of the target month.
///
/// January 31 plus one month is February 28 (or 29 in a leap year).
pub fn add_months(date: NaiveDate, n: i32) -> ReportResult<NaiveDate> {
    let shifted = if n >= 0 {
        date.checked_add_months(Months::new(n.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(n.unsigned_abs()))
    };
    shifted.ok_or_else(|| {
        ReportError::InvalidRange(format!("{} + {} months is out of range", date, n))
    })
}

// ============================================================================
// Formatting
// ============================================================================

/// Render a range as `"3 - 9 March"`, or `"28 February - 6 March"` across months
pub fn format_date_range(start: NaiveDate, end: NaiveDate, locale: Locale) -> String {
    let same_month = start.year() == end.year() && start.month() == end.month();
    let label = if same_month {
        format!(
            "{} - {} {}",
            start.day(),
            end.day(),
            locale.month_name(end.month())
        )
    } else {
        format!(
            "{} {} - {} {}",
            start.day(),
            locale.month_name(start.month()),
            end.day(),
            locale.month_name(end.month())
        )
    };
    locale.localize_digits(&label)
}

// ============================================================================
// Relative Days
// ============================================================================

/// Whether `date` is today on the local calendar
pub fn is_today(date: NaiveDate) -> bool {
    is_today_at(date, Local::now().date_naive())
}

/// Whether `date` is yesterday on the local calendar
pub fn is_yesterday(date: NaiveDate) -> bool {
    is_yesterday_at(date, Local::now().date_naive())
}

/// Whether `date` is `today`
pub fn is_today_at(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Whether `date` is the day before `today`
pub fn is_yesterday_at(date: NaiveDate, today: NaiveDate) -> bool {
    today.pred_opt() == Some(date)
}
