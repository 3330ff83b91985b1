//! The four statistics computed over a filtered [`TripTable`].
//!
//! Each function is read-only over the table, measures its own wall-clock
//! compute time and returns `None` when the table has no rows.

use std::time::{Duration, Instant};

use bikeshare_core::formatting::{seconds_to_days, seconds_to_minutes};
use bikeshare_core::models::TripTable;
use tracing::debug;

use crate::aggregator::FrequencyTable;

// ── Public types ──────────────────────────────────────────────────────────────

/// The modal value of a column together with how many distinct values it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub distinct: usize,
}

impl<T> Popular<T> {
    /// `true` when every row holds the same value, i.e. the user filtered on it.
    pub fn is_only_value(&self) -> bool {
        self.distinct == 1
    }
}

/// Most frequent times of travel.
#[derive(Debug, Clone)]
pub struct TimeStats {
    pub month: Popular<&'static str>,
    pub day: Popular<&'static str>,
    /// Modal start hour, 0-23.
    pub hour: u32,
    pub elapsed: Duration,
}

/// Most popular stations and route.
#[derive(Debug, Clone)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// Modal `"<start> ..to.. <end>"` pair.
    pub trip: String,
    pub elapsed: Duration,
}

/// Total and mean trip duration.
#[derive(Debug, Clone)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub elapsed: Duration,
}

impl DurationStats {
    /// Total travel time in days, one decimal.
    pub fn total_days(&self) -> f64 {
        seconds_to_days(self.total_seconds)
    }

    /// Mean trip time in minutes, one decimal.
    pub fn mean_minutes(&self) -> f64 {
        seconds_to_minutes(self.mean_seconds)
    }
}

/// Earliest, latest and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub latest: i64,
    pub most_common: i64,
}

/// Rider breakdowns.
#[derive(Debug, Clone)]
pub struct UserStats {
    /// Count per user type, blank values excluded.
    pub user_types: Vec<(String, usize)>,
    /// Count per gender; `None` when the dataset has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the dataset has no birth-year column or no row has a value.
    pub birth_years: Option<BirthYearStats>,
    pub elapsed: Duration,
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Modal month, day of week and start hour.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let started = Instant::now();

    let months: FrequencyTable<&'static str> = table.records().map(|r| r.month_name()).collect();
    let days: FrequencyTable<&'static str> = table.records().map(|r| r.day_name()).collect();
    let hours: FrequencyTable<u32> = table.records().map(|r| r.start_hour()).collect();

    let stats = TimeStats {
        month: popular(&months)?,
        day: popular(&days)?,
        hour: *hours.mode()?,
        elapsed: started.elapsed(),
    };
    debug!("time stats computed in {:?}", stats.elapsed);
    Some(stats)
}

/// Modal start station, end station and start/end pair.
///
/// Blank station names are not counted. A column with no names at all
/// reports an empty string.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }
    let started = Instant::now();

    let starts: FrequencyTable<&str> = table
        .records()
        .filter_map(|r| r.start_station.as_deref())
        .collect();
    let ends: FrequencyTable<&str> = table
        .records()
        .filter_map(|r| r.end_station.as_deref())
        .collect();
    let pairs: FrequencyTable<String> = table.records().filter_map(|r| r.station_pair()).collect();

    let stats = StationStats {
        start_station: starts.mode().map(|s| s.to_string()).unwrap_or_default(),
        end_station: ends.mode().map(|s| s.to_string()).unwrap_or_default(),
        trip: pairs.mode().cloned().unwrap_or_default(),
        elapsed: started.elapsed(),
    };
    debug!(
        "station stats computed in {:?}, {} of {} trips with a named route",
        stats.elapsed,
        pairs.total(),
        table.len()
    );
    Some(stats)
}

/// Sum and mean of the trip durations.
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let started = Instant::now();

    let durations: Vec<f64> = table.records().filter_map(|r| r.trip_duration).collect();
    let total_seconds: f64 = durations.iter().sum();
    let mean_seconds = if durations.is_empty() {
        0.0
    } else {
        total_seconds / durations.len() as f64
    };

    let stats = DurationStats {
        total_seconds,
        mean_seconds,
        elapsed: started.elapsed(),
    };
    debug!("duration stats computed in {:?}", stats.elapsed);
    Some(stats)
}

/// Counts by user type and gender plus birth-year extremes and mode.
///
/// Gender and birth year are only reported when the table's schema carries
/// those columns.
pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }
    let started = Instant::now();
    let schema = table.schema();

    let user_types: FrequencyTable<String> =
        table.records().filter_map(|r| r.user_type.clone()).collect();

    let genders = schema.has_gender.then(|| {
        table
            .records()
            .filter_map(|r| r.gender.clone())
            .collect::<FrequencyTable<String>>()
            .to_counts()
    });

    let birth_years = if schema.has_birth_year {
        birth_year_stats(table)
    } else {
        None
    };

    let stats = UserStats {
        user_types: user_types.to_counts(),
        genders,
        birth_years,
        elapsed: started.elapsed(),
    };
    debug!(
        "user stats computed in {:?}, {} trips with a user type",
        stats.elapsed,
        user_types.total()
    );
    Some(stats)
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn popular<T: Ord + Copy>(table: &FrequencyTable<T>) -> Option<Popular<T>> {
    table.mode().map(|value| Popular {
        value: *value,
        distinct: table.distinct(),
    })
}

/// Years are truncated to whole numbers; blank values are skipped.
fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let years: Vec<i64> = table
        .records()
        .filter_map(|r| r.birth_year)
        .filter(|y| y.is_finite())
        .map(|y| y.trunc() as i64)
        .collect();

    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;
    let frequencies: FrequencyTable<i64> = years.into_iter().collect();
    let most_common = *frequencies.mode()?;

    Some(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
