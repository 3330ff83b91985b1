use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed.
    #[error("Failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column every city dataset must carry is absent.
    #[error("Missing required column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// The city is not one of the known datasets.
    #[error("Unknown city: {0}")]
    InvalidCity(String),

    /// The month is not January to June or "all".
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// The day is not a weekday name or "all".
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// The interactive input stream reached end-of-file.
    #[error("Input stream closed")]
    InputClosed,

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = BikeshareError::FileRead {
            path: PathBuf::from("/data/chicago.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/data/chicago.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = BikeshareError::MissingColumn {
            path: PathBuf::from("washington.csv"),
            column: "Start Time".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required column \"Start Time\" in washington.csv"
        );
    }

    #[test]
    fn test_error_display_timestamp_parse() {
        let err = BikeshareError::TimestampParse("not-a-timestamp".to_string());
        assert_eq!(err.to_string(), "Invalid timestamp format: not-a-timestamp");
    }

    #[test]
    fn test_error_display_invalid_filters() {
        assert_eq!(
            BikeshareError::InvalidCity("boston".to_string()).to_string(),
            "Unknown city: boston"
        );
        assert_eq!(
            BikeshareError::InvalidMonth("july".to_string()).to_string(),
            "Invalid month: july"
        );
        assert_eq!(
            BikeshareError::InvalidDay("funday".to_string()).to_string(),
            "Invalid day: funday"
        );
    }

    #[test]
    fn test_error_display_input_closed() {
        assert_eq!(BikeshareError::InputClosed.to_string(), "Input stream closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BikeshareError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
