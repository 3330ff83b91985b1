//! CSV loading for the city trip datasets.
//!
//! Reads `chicago.csv`, `new_york_city.csv` or `washington.csv` from the data
//! directory and converts each line into a [`TripRow`], keeping the raw field
//! text alongside the parsed [`TripRecord`] for raw-data display.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{
    City, FilterSelection, TableSchema, TripRecord, TripRow, TripTable,
};
use bikeshare_core::time_utils::parse_timestamp;
use chrono::Datelike;
use serde::Deserialize;
use tracing::{debug, info};

use crate::filter::apply_filters;

// ── Row layout ────────────────────────────────────────────────────────────────

/// One CSV line as written by the dataset exporter.
///
/// Optional columns default to `None` when the city's file does not have
/// them; blank fields deserialize to `None` as well.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the dataset for `selection.city` and apply its month and day filters.
///
/// A missing file, malformed CSV, absent required column or unparseable start
/// time is returned as an error; nothing is written back to disk.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let table = load_city(data_dir, selection.city)?;
    let filtered = apply_filters(&table, selection.month, selection.day);
    info!(
        "Loaded {} trips for {}, {} after filtering",
        table.len(),
        selection,
        filtered.len()
    );
    Ok(filtered)
}

/// Load every trip for `city` from its CSV file under `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = city.data_path(data_dir);
    let file = File::open(&path).map_err(|source| BikeshareError::FileRead {
        path: path.clone(),
        source,
    })?;
    read_trips(city, &path, BufReader::new(file))
}

/// Parse trips for `city` from any CSV source.
///
/// `path` is used only to label errors.
pub fn read_trips<R: Read>(city: City, path: &Path, reader: R) -> Result<TripTable> {
    let csv_error = |source: csv::Error| BikeshareError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let schema = TableSchema::from_headers(headers.iter().map(str::to_string).collect());

    if let Some(column) = schema.missing_required().first() {
        return Err(BikeshareError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        });
    }

    let mut rows: Vec<TripRow> = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(csv_error)?;
        let raw: RawTrip = record.deserialize(Some(&headers)).map_err(csv_error)?;

        let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| {
            BikeshareError::TimestampParse(format!(
                "{} ({}, line {})",
                raw.start_time,
                path.display(),
                record.position().map(|p| p.line()).unwrap_or_default()
            ))
        })?;
        let end_time = raw.end_time.as_deref().and_then(parse_timestamp);
        let trip_id = schema
            .index_column
            .and_then(|i| record.get(i))
            .map(str::to_string);

        rows.push(TripRow {
            record: TripRecord {
                trip_id,
                start_time,
                end_time,
                trip_duration: raw.trip_duration,
                start_station: non_blank(raw.start_station),
                end_station: non_blank(raw.end_station),
                user_type: non_blank(raw.user_type),
                gender: non_blank(raw.gender),
                birth_year: raw.birth_year,
                day_of_week: start_time.weekday(),
            },
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    let missing_end = schema.has_end_time
        && rows.iter().any(|row| row.record.end_time.is_none());
    let missing_duration = rows
        .iter()
        .filter(|row| row.record.trip_duration.is_none())
        .count();
    debug!(
        "File {}: {} rows read, end time: {} (gaps: {}), blank durations: {}, gender: {}, birth year: {}",
        path.display(),
        rows.len(),
        schema.has_end_time,
        missing_end,
        missing_duration,
        schema.has_gender,
        schema.has_birth_year
    );

    Ok(TripTable::new(city, schema, rows))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whitespace-only text counts as missing.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
