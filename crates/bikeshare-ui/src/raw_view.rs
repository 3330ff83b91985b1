//! Raw trip rows printed one field per line.

use std::io::{self, Write};
use std::ops::Range;

use bikeshare_core::formatting::capitalize;
use bikeshare_core::models::{TripTable, DAY_OF_WEEK_COLUMN};

/// Print the rows of `table` in `range`, clamped to the table length.
///
/// Each row lists every file column (the index column labelled `Trip id`)
/// followed by the derived day of week, as `<Name>: <value>`. Rows are
/// separated by a blank line. Returns the number of rows printed.
pub fn render_rows<W: Write>(
    out: &mut W,
    table: &TripTable,
    range: Range<usize>,
) -> io::Result<usize> {
    let end = range.end.min(table.len());
    let start = range.start.min(end);
    let headers = table.schema().display_headers();
    let day_label = capitalize(DAY_OF_WEEK_COLUMN);

    for row in &table.rows()[start..end] {
        for (header, value) in headers.iter().zip(&row.fields) {
            writeln!(out, "{}: {}", capitalize(header), value)?;
        }
        writeln!(out, "{}: {}", day_label, row.record.day_name())?;
        writeln!(out, "\n")?;
    }

    out.flush()?;
    Ok(end - start)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{City, TableSchema, TripRecord, TripRow};
    use bikeshare_core::time_utils::parse_timestamp;
    use chrono::Datelike;

    fn table(n: usize) -> TripTable {
        let headers = vec![
            "".to_string(),
            "Start Time".to_string(),
            "Start Station".to_string(),
        ];
        let rows = (0..n)
            .map(|i| {
                let start = format!("2017-01-{:02} 08:00:00", i + 1);
                let start_time = parse_timestamp(&start).unwrap();
                TripRow {
                    record: TripRecord {
                        trip_id: Some(format!("{}", 100 + i)),
                        start_time,
                        end_time: None,
                        trip_duration: Some(60.0),
                        start_station: Some(format!("Station {}", i)),
                        end_station: Some("End".to_string()),
                        user_type: None,
                        gender: None,
                        birth_year: None,
                        day_of_week: start_time.weekday(),
                    },
                    fields: vec![format!("{}", 100 + i), start, format!("Station {}", i)],
                }
            })
            .collect();
        TripTable::new(City::Washington, TableSchema::from_headers(headers), rows)
    }

    fn render(table: &TripTable, range: Range<usize>) -> (String, usize) {
        let mut buf = Vec::new();
        let printed = render_rows(&mut buf, table, range).unwrap();
        (String::from_utf8(buf).unwrap(), printed)
    }

    #[test]
    fn test_render_single_row_layout() {
        let (text, printed) = render(&table(1), 0..5);
        assert_eq!(printed, 1);
        assert_eq!(
            text,
            "Trip id: 100\n\
             Start time: 2017-01-01 08:00:00\n\
             Start station: Station 0\n\
             Day of week: Sunday\n\
             \n\n"
        );
    }

    #[test]
    fn test_render_window_in_middle() {
        let (text, printed) = render(&table(7), 2..4);
        assert_eq!(printed, 2);
        assert!(text.contains("Trip id: 102"));
        assert!(text.contains("Trip id: 103"));
        assert!(!text.contains("Trip id: 104"));
    }

    #[test]
    fn test_render_clamps_past_end() {
        let (text, printed) = render(&table(7), 5..10);
        assert_eq!(printed, 2);
        assert!(text.contains("Trip id: 105"));
        assert!(text.contains("Trip id: 106"));
    }

    #[test]
    fn test_render_fully_out_of_range() {
        let (text, printed) = render(&table(3), 5..10);
        assert_eq!(printed, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_render_never_shows_station_pair() {
        let (text, _) = render(&table(2), 0..2);
        assert!(!text.contains("..to.."));
    }
}
