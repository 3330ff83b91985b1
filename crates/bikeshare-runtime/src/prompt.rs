//! Input collection for the city, month and day filters.
//!
//! Each prompt repeats until the answer parses; there is no retry limit.
//! Only a closed input stream ends collection early.

use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::separator;
use bikeshare_core::models::{City, DayFilter, FilterSelection, MonthFilter};
use tracing::debug;

use crate::console::Console;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str = "Please enter a city from: chicago, new york city, washington: ";
pub const MONTH_PROMPT: &str = "Please enter a single month from january to june, or type all: ";
pub const DAY_PROMPT: &str = "Please enter a day of the week, or type all: ";

const INVALID_CITY: &str = "Not a valid city! Input one from the list shown.";
const INVALID_MONTH: &str = "Not a valid month! Input one from the list shown.";
const INVALID_DAY: &str = "Not a valid day! Input one from the list shown.";

/// Printed after every attempt, valid or not.
pub const ATTEMPT_NOTICE: &str = "Attempted Input";

/// Ask for city, month and day until each answer is valid.
///
/// Returns [`BikeshareError::InputClosed`] if the input stream ends first.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection> {
    writeln!(console.output(), "{}", GREETING)?;

    let city: City = ask_until_valid(console, CITY_PROMPT, INVALID_CITY)?;
    let month: MonthFilter = ask_until_valid(console, MONTH_PROMPT, INVALID_MONTH)?;
    let day: DayFilter = ask_until_valid(console, DAY_PROMPT, INVALID_DAY)?;

    writeln!(console.output(), "{}", separator())?;

    let selection = FilterSelection { city, month, day };
    debug!("filters collected: {}", selection);
    Ok(selection)
}

fn ask_until_valid<T, R, W>(console: &mut Console<R, W>, prompt: &str, invalid: &str) -> Result<T>
where
    T: FromStr<Err = BikeshareError>,
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?.ok_or(BikeshareError::InputClosed)?;
        let parsed = answer.parse::<T>();

        if let Err(e) = &parsed {
            debug!("rejected input: {}", e);
            writeln!(console.output(), "\n{}", invalid)?;
        }
        writeln!(console.output(), "\n{} \n", ATTEMPT_NOTICE)?;

        if let Ok(value) = parsed {
            return Ok(value);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
