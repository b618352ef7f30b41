//! Date and time helpers.
//!
//! Timestamps are written as local wall-clock date-times (`YYYYMMDDTHHMMSS`) with no
//! trailing `Z`. The library never converts between zones; a TZID is only recorded
//! as a property parameter next to the value.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike};

const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Formats a date-time as an iCalendar local `DATE-TIME` value.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use icalgen::time::format_date_time;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
/// assert_eq!(format_date_time(&dt), "20240305T093000");
/// ```
#[must_use]
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// Converts a Unix timestamp (seconds) to a date-time.
///
/// Returns `None` when the timestamp is out of range.
#[must_use]
pub fn from_timestamp(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

/// The moment a component is stamped as created: one second before `start`.
#[must_use]
pub fn stamp_before(start: &NaiveDateTime) -> NaiveDateTime {
    start
        .checked_sub_signed(Duration::seconds(1))
        .unwrap_or(*start)
}

/// Calendar and clock fields of a date-time, split out for all-day detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateParts {
    #[must_use]
    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }
}

impl From<&NaiveDateTime> for DateParts {
    fn from(dt: &NaiveDateTime) -> Self {
        DateParts {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Returns `true` when `start..end` looks like a whole-day span.
///
/// Both ends must sit exactly on midnight, and the end date must be "later" than the
/// start date. Day, month and year are each compared on their own, so an end whose
/// day number is larger counts as later even when its year is earlier.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use icalgen::time::is_all_day_span;
///
/// let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// assert!(is_all_day_span(&day(2024, 5, 1), &day(2024, 5, 2)));
/// assert!(!is_all_day_span(&day(2024, 5, 1), &day(2024, 5, 1)));
/// ```
#[must_use]
pub fn is_all_day_span(start: &NaiveDateTime, end: &NaiveDateTime) -> bool {
    let start = DateParts::from(start);
    let end = DateParts::from(end);

    start.is_midnight()
        && end.is_midnight()
        && (end.day > start.day || end.month > start.month || end.year > start.year)
}

/// Formats a negative trigger offset as `-P{days}DT{hours}H{minutes}M{seconds}S`.
///
/// # Examples
///
/// ```rust
/// use icalgen::time::trigger_duration;
///
/// assert_eq!(trigger_duration(0, 1, 0, 0), "-P0DT1H0M0S");
/// ```
#[must_use]
pub fn trigger_duration(days: u32, hours: u32, minutes: u32, seconds: u32) -> String {
    format!("-P{days}DT{hours}H{minutes}M{seconds}S")
}
