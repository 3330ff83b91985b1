use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDateTime, Weekday};

use crate::error::BikeshareError;
use crate::time_utils;

// ── Column names ──────────────────────────────────────────────────────────────

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    START_TIME,
    START_STATION,
    END_STATION,
    TRIP_DURATION,
    USER_TYPE,
];

/// Display label for the unnamed row-index column.
pub const TRIP_ID_LABEL: &str = "Trip ID";

/// Name of the column derived from `Start Time` at load.
pub const DAY_OF_WEEK_COLUMN: &str = "day of week";

/// Separator used when joining start and end station into a route.
pub const STATION_PAIR_SEPARATOR: &str = " ..to.. ";

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities with a trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case key the user types at the prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's CSV dataset.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Path of the city's dataset inside `data_dir`.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| BikeshareError::InvalidCity(s.trim().to_string()))
    }
}

// ── Month / day filters ───────────────────────────────────────────────────────

/// Months covered by the datasets.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays, Monday first.
pub const FILTER_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Month selection: every month or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Whether `ts` falls in the selected month.
    pub fn matches(&self, ts: &NaiveDateTime) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => ts.month() == month.number_from_month(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .map(MonthFilter::Only)
            .ok_or_else(|| BikeshareError::InvalidMonth(wanted.to_string()))
    }
}

/// Day-of-week selection: every day or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Whether `day` is the selected weekday.
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(selected) => *selected == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => f.write_str(time_utils::weekday_name(*day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        FILTER_DAYS
            .into_iter()
            .find(|d| time_utils::weekday_name(*d).eq_ignore_ascii_case(wanted))
            .map(DayFilter::Only)
            .ok_or_else(|| BikeshareError::InvalidDay(wanted.to_string()))
    }
}

/// The city, month and day chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (month: {}, day: {})", self.city, self.month, self.day)
    }
}

// ── Trip records ──────────────────────────────────────────────────────────────

/// A single trip read from a city dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Value of the unnamed row-index column, if the file has one.
    pub trip_id: Option<String>,
    /// When the trip started.
    pub start_time: NaiveDateTime,
    /// When the trip ended, if the dataset records it.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds; `None` when blank.
    pub trip_duration: Option<f64>,
    /// `None` when blank.
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// `"Subscriber"`, `"Customer"`, ...; `None` when blank.
    pub user_type: Option<String>,
    /// `None` when blank or when the city has no gender column.
    pub gender: Option<String>,
    /// `None` when blank or when the city has no birth-year column.
    pub birth_year: Option<f64>,
    /// Weekday derived from `start_time`.
    pub day_of_week: Weekday,
}

impl TripRecord {
    /// Month name of the start time, e.g. `"March"`.
    pub fn month_name(&self) -> &'static str {
        time_utils::month_name(&self.start_time)
    }

    /// Weekday name of the start time, e.g. `"Tuesday"`.
    pub fn day_name(&self) -> &'static str {
        time_utils::weekday_name(self.day_of_week)
    }

    /// Hour of day (0-23) the trip started.
    pub fn start_hour(&self) -> u32 {
        time_utils::hour_of(&self.start_time)
    }

    /// Route label joining start and end station, `None` if either is blank.
    pub fn station_pair(&self) -> Option<String> {
        let start = self.start_station.as_deref()?;
        let end = self.end_station.as_deref()?;
        Some(format!("{}{}{}", start, STATION_PAIR_SEPARATOR, end))
    }
}

/// A parsed trip together with the raw field text of its CSV line.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub record: TripRecord,
    /// Field strings in header order.
    pub fields: Vec<String>,
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Column layout of a loaded dataset and which optional columns it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Headers exactly as they appear in the file.
    pub headers: Vec<String>,
    /// Position of the unnamed row-index column.
    pub index_column: Option<usize>,
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TableSchema {
    /// Inspect `headers` once and record the capabilities of the dataset.
    pub fn from_headers(headers: Vec<String>) -> Self {
        let has = |name: &str| headers.iter().any(|h| h == name);
        let index_column = headers.iter().position(|h| is_index_header(h));
        Self {
            index_column,
            has_end_time: has(END_TIME),
            has_gender: has(GENDER),
            has_birth_year: has(BIRTH_YEAR),
            headers,
        }
    }

    /// Position of `name` among the headers.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Required columns absent from this dataset.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .into_iter()
            .filter(|c| self.position(c).is_none())
            .collect()
    }

    /// Headers as shown to the user: the index column becomes `Trip ID`.
    pub fn display_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if Some(i) == self.index_column {
                    TRIP_ID_LABEL.to_string()
                } else {
                    h.clone()
                }
            })
            .collect()
    }
}

/// An empty or auto-generated (`Unnamed: 0`) header marks the index column.
fn is_index_header(header: &str) -> bool {
    let trimmed = header.trim();
    trimmed.is_empty() || trimmed.starts_with("Unnamed")
}

// ── TripTable ─────────────────────────────────────────────────────────────────

/// Ordered trips loaded for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    schema: TableSchema,
    rows: Vec<TripRow>,
}

impl TripTable {
    pub fn new(city: City, schema: TableSchema, rows: Vec<TripRow>) -> Self {
        Self { city, schema, rows }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[TripRow] {
        &self.rows
    }

    /// Iterate over the parsed records in table order.
    pub fn records(&self) -> impl Iterator<Item = &TripRecord> {
        self.rows.iter().map(|r| &r.record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New table holding the rows for which `keep` is true, order preserved.
    pub fn filtered(&self, mut keep: impl FnMut(&TripRecord) -> bool) -> TripTable {
        let rows = self
            .rows
            .iter()
            .filter(|row| keep(&row.record))
            .cloned()
            .collect();
        TripTable::new(self.city, self.schema.clone(), rows)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(start: &str, station: &str) -> TripRecord {
        let start_time = time_utils::parse_timestamp(start).unwrap();
        TripRecord {
            trip_id: None,
            start_time,
            end_time: None,
            trip_duration: Some(600.0),
            start_station: Some(station.to_string()),
            end_station: Some("Lake Shore Dr".to_string()),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            day_of_week: start_time.weekday(),
        }
    }

    // ── City ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_city_parse_case_insensitive() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("NEW YORK CITY".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!(" washington\n".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        assert!(matches!(
            "boston".parse::<City>(),
            Err(BikeshareError::InvalidCity(_))
        ));
        assert!("new york".parse::<City>().is_err());
        assert!("".parse::<City>().is_err());
    }

    #[test]
    fn test_every_city_maps_to_one_distinct_file() {
        let mut files: Vec<&str> = City::ALL.iter().map(|c| c.file_name()).collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), 3);
        assert_eq!(
            City::NewYorkCity.data_path(Path::new("/data")),
            PathBuf::from("/data/new_york_city.csv")
        );
    }

    // ── MonthFilter / DayFilter ───────────────────────────────────────────────

    #[test]
    fn test_month_filter_parse() {
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "MaRcH".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::March)
        );
        assert_eq!(
            "june".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::June)
        );
    }

    #[test]
    fn test_month_filter_rejects_outside_first_half() {
        assert!(matches!(
            "july".parse::<MonthFilter>(),
            Err(BikeshareError::InvalidMonth(_))
        ));
        assert!("jan".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_month_filter_matches() {
        let ts = NaiveDate::from_ymd_opt(2017, 3, 9)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert!(MonthFilter::All.matches(&ts));
        assert!(MonthFilter::Only(Month::March).matches(&ts));
        assert!(!MonthFilter::Only(Month::April).matches(&ts));
    }

    #[test]
    fn test_day_filter_parse_and_match() {
        assert_eq!("ALL".parse::<DayFilter>().unwrap(), DayFilter::All);
        let friday = "friday".parse::<DayFilter>().unwrap();
        assert_eq!(friday, DayFilter::Only(Weekday::Fri));
        assert!(friday.matches(Weekday::Fri));
        assert!(!friday.matches(Weekday::Sat));
        assert!(matches!(
            "fri".parse::<DayFilter>(),
            Err(BikeshareError::InvalidDay(_))
        ));
    }

    #[test]
    fn test_filter_display() {
        let selection = FilterSelection {
            city: City::NewYorkCity,
            month: MonthFilter::Only(Month::May),
            day: DayFilter::Only(Weekday::Sun),
        };
        assert_eq!(
            selection.to_string(),
            "New York City (month: May, day: Sunday)"
        );
    }

    // ── TripRecord ────────────────────────────────────────────────────────────

    #[test]
    fn test_trip_record_derived_values() {
        let r = record("2017-01-01 09:07:57", "Canal St");
        assert_eq!(r.month_name(), "January");
        assert_eq!(r.day_name(), "Sunday");
        assert_eq!(r.start_hour(), 9);
        assert_eq!(
            r.station_pair().as_deref(),
            Some("Canal St ..to.. Lake Shore Dr")
        );
    }

    #[test]
    fn test_station_pair_needs_both_ends() {
        let mut r = record("2017-01-01 09:07:57", "Canal St");
        r.end_station = None;
        assert!(r.station_pair().is_none());
    }

    // ── TableSchema ───────────────────────────────────────────────────────────

    #[test]
    fn test_schema_capabilities() {
        let headers = vec![
            "".to_string(),
            START_TIME.to_string(),
            END_TIME.to_string(),
            TRIP_DURATION.to_string(),
            START_STATION.to_string(),
            END_STATION.to_string(),
            USER_TYPE.to_string(),
        ];
        let schema = TableSchema::from_headers(headers);
        assert_eq!(schema.index_column, Some(0));
        assert!(schema.has_end_time);
        assert!(!schema.has_gender);
        assert!(!schema.has_birth_year);
        assert!(schema.missing_required().is_empty());
        assert_eq!(schema.display_headers()[0], TRIP_ID_LABEL);
    }

    #[test]
    fn test_schema_reports_missing_required() {
        let schema = TableSchema::from_headers(vec![
            "Unnamed: 0".to_string(),
            START_TIME.to_string(),
            GENDER.to_string(),
        ]);
        assert_eq!(schema.index_column, Some(0));
        assert!(schema.has_gender);
        assert_eq!(
            schema.missing_required(),
            vec![START_STATION, END_STATION, TRIP_DURATION, USER_TYPE]
        );
    }

    // ── TripTable ─────────────────────────────────────────────────────────────

    #[test]
    fn test_trip_table_filtered_preserves_order() {
        let schema = TableSchema::from_headers(vec![START_TIME.to_string()]);
        let rows: Vec<TripRow> = ["A", "B", "C", "D"]
            .iter()
            .map(|s| TripRow {
                record: record("2017-02-01 10:00:00", s),
                fields: vec![s.to_string()],
            })
            .collect();
        let table = TripTable::new(City::Chicago, schema, rows);

        let kept = table.filtered(|r| r.start_station.as_deref() != Some("B"));
        let names: Vec<&str> = kept
            .records()
            .filter_map(|r| r.start_station.as_deref())
            .collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert_eq!(table.len(), 4, "source table is untouched");
    }
}
