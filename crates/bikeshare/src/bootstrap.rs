use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use bikeshare_core::models::City;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name onto a tracing filter directive.
///
/// Unknown names fall back to `"warn"`.
pub fn filter_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Events go to stderr, or are appended to `log_file` when one is given.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::new(filter_directive(log_level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
    }

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Resolve the directory holding the city CSV files.
///
/// An explicit `--data-dir` wins. Otherwise `./data` and then `.` are
/// checked for any city file, falling back to `.`.
pub fn discover_data_dir(explicit: Option<&Path>) -> PathBuf {
    discover_data_dir_in(Path::new("."), explicit)
}

/// [`discover_data_dir`] relative to `base` instead of the working directory.
pub fn discover_data_dir_in(base: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let candidates = [base.join("data"), base.to_path_buf()];
    candidates
        .into_iter()
        .find(|dir| has_city_file(dir))
        .unwrap_or_else(|| base.to_path_buf())
}

fn has_city_file(dir: &Path) -> bool {
    City::ALL.iter().any(|city| city.data_path(dir).is_file())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
