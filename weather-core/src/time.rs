//! Calendar formatting relative to a location's UTC offset.
//!
//! All helpers take the offset explicitly; the host timezone never enters
//! the calculation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Wall-clock time at a location `utc_offset` seconds away from UTC.
pub fn local_datetime(timestamp: i64, utc_offset: i64) -> Option<NaiveDateTime> {
    let local = timestamp.checked_add(utc_offset)?;
    DateTime::from_timestamp(local, 0).map(|dt| dt.naive_utc())
}

/// Calendar date at the location.
pub fn local_date(timestamp: i64, utc_offset: i64) -> Option<NaiveDate> {
    local_datetime(timestamp, utc_offset).map(|dt| dt.date())
}

/// Long en-US date, e.g. "Monday, January 15, 2024".
pub fn format_unix_time(timestamp: i64, utc_offset: i64) -> String {
    match local_datetime(timestamp, utc_offset) {
        Some(dt) => dt.format("%A, %B %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// "Tue"
pub fn short_weekday(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// "Jan 16"
pub fn short_month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
