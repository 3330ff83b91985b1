//! Raw-data paging: five filtered rows per "yes".

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::models::TripTable;
use bikeshare_ui::raw_view::render_rows;
use tracing::debug;

use crate::console::Console;

/// Rows printed per page.
pub const PAGE_SIZE: usize = 5;

pub const FIRST_PAGE_PROMPT: &str = "\nWould you like to see 5 lines of raw data? Enter yes or no.\n";
pub const NEXT_PAGE_PROMPT: &str =
    "\nWould you like to see 5 more lots of raw data? Enter yes or no.\n";

/// Printed once every row has been shown.
pub const END_OF_DATA_NOTICE: &str = "No more raw data to display.";

/// Offer the filtered rows page by page until the user declines.
///
/// Paging stops on its own at the end of the table: a final partial page
/// prints only the remaining rows and no further prompt is shown. Returns the
/// number of rows printed.
pub fn page_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let mut offset = 0;
    let mut prompt = FIRST_PAGE_PROMPT;

    while console.confirm(prompt)? {
        let printed = render_rows(console.output(), table, offset..offset + PAGE_SIZE)?;
        offset += printed;
        debug!("raw data page printed {} rows, offset now {}", printed, offset);

        if offset >= table.len() {
            writeln!(console.output(), "{}", END_OF_DATA_NOTICE)?;
            break;
        }
        prompt = NEXT_PAGE_PROMPT;
    }

    writeln!(console.output(), "\n")?;
    Ok(offset)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{City, TableSchema, TripRecord, TripRow};
    use bikeshare_core::time_utils::parse_timestamp;
    use chrono::Datelike;
    use std::io::Cursor;

    fn table(n: usize) -> TripTable {
        let rows = (0..n)
            .map(|i| {
                let start = format!("2017-02-{:02} 07:30:00", i + 1);
                let start_time = parse_timestamp(&start).unwrap();
                TripRow {
                    record: TripRecord {
                        trip_id: Some(i.to_string()),
                        start_time,
                        end_time: None,
                        trip_duration: Some(300.0),
                        start_station: Some("A".to_string()),
                        end_station: Some("B".to_string()),
                        user_type: Some("Customer".to_string()),
                        gender: None,
                        birth_year: None,
                        day_of_week: start_time.weekday(),
                    },
                    fields: vec![format!("row-{}", i), start],
                }
            })
            .collect();
        let headers = vec!["".to_string(), "Start Time".to_string()];
        TripTable::new(City::Chicago, TableSchema::from_headers(headers), rows)
    }

    fn run(table: &TripTable, input: &str) -> (usize, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let shown = page_raw_data(&mut console, table).unwrap();
        (shown, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_decline_prints_nothing() {
        let (shown, output) = run(&table(7), "no\n");
        assert_eq!(shown, 0);
        assert!(!output.contains("row-0"));
        assert_eq!(output.matches(FIRST_PAGE_PROMPT).count(), 1);
    }

    #[test]
    fn test_first_page_then_decline() {
        let (shown, output) = run(&table(7), "yes\nno\n");
        assert_eq!(shown, 5);
        for i in 0..5 {
            assert!(output.contains(&format!("Trip id: row-{}", i)));
        }
        assert!(!output.contains("row-5"));
        assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 1);
    }

    #[test]
    fn test_seven_rows_stop_at_table_end() {
        // The third "yes" must never be read: paging ends after row 6.
        let (shown, output) = run(&table(7), "YES\nyes\nyes\n");
        assert_eq!(shown, 7);
        assert!(output.contains("Trip id: row-5"));
        assert!(output.contains("Trip id: row-6"));
        assert!(!output.contains("row-7"));
        assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 1);
        assert!(output.contains(END_OF_DATA_NOTICE));
    }

    #[test]
    fn test_exact_page_boundary() {
        let (shown, output) = run(&table(5), "yes\n");
        assert_eq!(shown, 5);
        assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 0);
        assert!(output.contains(END_OF_DATA_NOTICE));
    }

    #[test]
    fn test_empty_table() {
        let (shown, output) = run(&table(0), "yes\n");
        assert_eq!(shown, 0);
        assert!(output.contains(END_OF_DATA_NOTICE));
    }

    #[test]
    fn test_eof_counts_as_no() {
        let (shown, _) = run(&table(3), "");
        assert_eq!(shown, 0);
    }
}
