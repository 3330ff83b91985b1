//! Domain model and shared helpers for the bikeshare explorer.
//!
//! Cities, month/day filters, trip records and tables, the error type,
//! command-line settings, and formatting and calendar helpers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
