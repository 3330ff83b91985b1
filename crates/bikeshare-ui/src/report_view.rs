//! Plain-text rendering of the four statistics reports.
//!
//! Every report opens with a "Calculating ..." heading and closes with the
//! compute time and a dashed separator. An empty filtered table renders a
//! notice in place of the figures.

use std::io::{self, Write};
use std::time::Duration;

use bikeshare_core::formatting::{format_elapsed, hour_label, separator};
use bikeshare_data::analysis::{DurationStats, StationStats, TimeStats, UserStats};

/// Shown instead of statistics when no trip survived the filters.
pub const NO_TRIPS_NOTICE: &str = "No trips match the selected filters.";

pub const TIME_HEADING: &str = "Calculating The Most Frequent Times of Travel...";
pub const STATION_HEADING: &str = "Calculating The Most Popular Stations and Trip...";
pub const DURATION_HEADING: &str = "Calculating Trip Duration...";
pub const USER_HEADING: &str = "Calculating User Stats...";

/// Render the popular-times report.
///
/// A column holding a single distinct value is reported as the user's
/// selection rather than as a "most common" finding.
pub fn render_time_stats<W: Write>(out: &mut W, stats: Option<&TimeStats>) -> io::Result<()> {
    write_heading(out, TIME_HEADING)?;
    let Some(stats) = stats else {
        return write_empty(out);
    };

    if stats.month.is_only_value() {
        writeln!(out, "You selected {} as your report month", stats.month.value)?;
    } else {
        writeln!(
            out,
            "The most common month for hiring a bike is... {}",
            stats.month.value
        )?;
    }

    if stats.day.is_only_value() {
        writeln!(out, "You selected {} as your report day of week", stats.day.value)?;
    } else {
        writeln!(
            out,
            "The most common day for hiring a bike is... {}",
            stats.day.value
        )?;
    }

    writeln!(
        out,
        "The most common hour for hiring a bike is... {}",
        hour_label(stats.hour)
    )?;

    write_footer(out, stats.elapsed)
}

/// Render the popular-stations report.
pub fn render_station_stats<W: Write>(
    out: &mut W,
    stats: Option<&StationStats>,
) -> io::Result<()> {
    write_heading(out, STATION_HEADING)?;
    let Some(stats) = stats else {
        return write_empty(out);
    };

    writeln!(
        out,
        "The most commonly used start station is... {}",
        stats.start_station
    )?;
    writeln!(
        out,
        "The most commonly used end station is... {}",
        stats.end_station
    )?;
    writeln!(out, "The most common trip is... {}", stats.trip)?;

    write_footer(out, stats.elapsed)
}

/// Render the trip-duration report.
pub fn render_duration_stats<W: Write>(
    out: &mut W,
    stats: Option<&DurationStats>,
) -> io::Result<()> {
    write_heading(out, DURATION_HEADING)?;
    let Some(stats) = stats else {
        return write_empty(out);
    };

    writeln!(
        out,
        "The total travel time of all rides is... {:.1} days.",
        stats.total_days()
    )?;
    writeln!(
        out,
        "The average ride time is... {:.1} minutes.",
        stats.mean_minutes()
    )?;

    write_footer(out, stats.elapsed)
}

/// Render the user breakdown report.
pub fn render_user_stats<W: Write>(out: &mut W, stats: Option<&UserStats>) -> io::Result<()> {
    write_heading(out, USER_HEADING)?;
    let Some(stats) = stats else {
        return write_empty(out);
    };

    for (user_type, count) in &stats.user_types {
        writeln!(out, "User Type: {} | Count: {}", user_type, count)?;
    }

    match &stats.genders {
        Some(genders) => {
            for (gender, count) in genders {
                writeln!(out, "Gender: {} | Count: {}", gender, count)?;
            }
            writeln!(out, "\n")?;
        }
        None => writeln!(out, "No Gender data in data set")?,
    }

    match &stats.birth_years {
        Some(years) => {
            writeln!(out, "The earliest birth year is... {}", years.earliest)?;
            writeln!(out, "The most recent birth year is... {}", years.latest)?;
            writeln!(out, "The most common birth year is... {}", years.most_common)?;
        }
        None => writeln!(out, "No Birth Year in data set")?,
    }

    write_footer(out, stats.elapsed)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn write_heading<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out, "\n{}\n", heading)
}

fn write_footer<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", format_elapsed(elapsed))?;
    writeln!(out, "{}", separator())?;
    out.flush()
}

fn write_empty<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", NO_TRIPS_NOTICE)?;
    writeln!(out, "{}", separator())?;
    out.flush()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
