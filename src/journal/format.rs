//! Timestamp formatting for entry display

use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Local date/time layout, e.g. "11/14/2023, 10:13:20 PM"
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Text shown for timestamps that cannot be interpreted
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a millisecond timestamp string in the local time zone
pub fn format_timestamp(timestamp_ms: &str) -> String {
    format_timestamp_in(timestamp_ms, &Local)
}

/// Format a millisecond timestamp string in `zone`
pub fn format_timestamp_in<Tz>(timestamp_ms: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp_ms
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|ms| zone.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
