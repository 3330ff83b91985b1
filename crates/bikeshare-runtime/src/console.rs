//! Line-oriented prompt I/O over any reader/writer pair.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use tracing::debug;

/// Interactive console: prompts go to `output`, answers come from `input`.
///
/// Generic so that whole sessions can be driven from scripted input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for report and notice output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one answer line, trimmed.
    ///
    /// Returns `None` once the input stream is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input stream closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question. Only "yes" (any case) counts as agreement;
    /// anything else, including end of input, is "no".
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
