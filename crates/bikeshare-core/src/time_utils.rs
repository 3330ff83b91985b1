use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use tracing::warn;

// ── Calendar names ────────────────────────────────────────────────────────────

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Full English name of `day`, e.g. `"Wednesday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Full English month name of `ts`, e.g. `"March"`.
pub fn month_name(ts: &NaiveDateTime) -> &'static str {
    MONTH_NAMES[ts.month0() as usize]
}

/// Hour of day (0-23) of `ts`.
pub fn hour_of(ts: &NaiveDateTime) -> u32 {
    ts.hour()
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Layouts accepted for the `Start Time` / `End Time` columns.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a naive (zone-less) timestamp as written in the city datasets.
///
/// Returns `None` for empty strings or unrecognised layouts.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
