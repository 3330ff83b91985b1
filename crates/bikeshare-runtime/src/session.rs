//! The interactive session loop.
//!
//! One iteration collects filters, loads the city's table, prints the four
//! reports, offers raw data and asks whether to restart. Nothing carries
//! over between iterations.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_data::analysis::{duration_stats, station_stats, time_stats, user_stats};
use bikeshare_data::reader::load_data;
use bikeshare_ui::report_view::{
    render_duration_stats, render_station_stats, render_time_stats, render_user_stats,
};
use tracing::info;

use crate::console::Console;
use crate::paginator::page_raw_data;
use crate::prompt::collect_filters;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";
pub const FAREWELL: &str = "Goodbye!";

/// Inputs that stay fixed for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the city CSV files.
    pub data_dir: PathBuf,
    /// Pause after each report. Zero disables it.
    pub pause: Duration,
}

/// Drives the prompt → load → report → page → restart cycle.
pub struct Session<R, W> {
    config: SessionConfig,
    console: Console<R, W>,
    iterations: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Self {
            config,
            console: Console::new(input, output),
            iterations: 0,
        }
    }

    /// Number of completed or started iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consume the session and return its writer.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run until the user declines to restart or input runs out.
    ///
    /// Load failures are returned to the caller; a closed input stream during
    /// filter collection ends the session normally.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.iterations += 1;
            info!("Session iteration {} starting", self.iterations);

            match self.run_once() {
                Ok(()) => {}
                Err(BikeshareError::InputClosed) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }

            if !self.console.confirm(RESTART_PROMPT)? {
                break;
            }
        }

        writeln!(self.console.output(), "\n{}", FAREWELL)?;
        self.console.output().flush()?;
        Ok(())
    }

    fn run_once(&mut self) -> Result<()> {
        let selection = collect_filters(&mut self.console)?;
        let table = load_data(&self.config.data_dir, &selection)?;

        render_time_stats(self.console.output(), time_stats(&table).as_ref())?;
        self.pause();
        render_station_stats(self.console.output(), station_stats(&table).as_ref())?;
        self.pause();
        render_duration_stats(self.console.output(), duration_stats(&table).as_ref())?;
        self.pause();
        render_user_stats(self.console.output(), user_stats(&table).as_ref())?;
        self.pause();

        page_raw_data(&mut self.console, &table)?;
        Ok(())
    }

    fn pause(&self) {
        if !self.config.pause.is_zero() {
            thread::sleep(self.config.pause);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
