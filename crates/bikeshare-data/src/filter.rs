//! Month and day-of-week filtering over a loaded [`TripTable`].

use bikeshare_core::models::{DayFilter, MonthFilter, TripTable};
use tracing::debug;

/// Keep the trips whose start time falls in `month` and on `day`.
///
/// Either filter may be `All`; active filters combine with AND. The result is
/// a new table in file order, so applying the same filters again
/// yields an identical table.
pub fn apply_filters(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    if month == MonthFilter::All && day == DayFilter::All {
        return table.clone();
    }

    let filtered =
        table.filtered(|trip| month.matches(&trip.start_time) && day.matches(trip.day_of_week));

    debug!(
        "Filter month={} day={}: kept {} of {} trips",
        month,
        day,
        filtered.len(),
        table.len()
    );

    filtered
}

// ── Tests ─────────────────────────────────────────────────────────────────────
