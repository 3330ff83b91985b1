//! Data layer for the bikeshare explorer.
//!
//! Loads a city's trip CSV, applies the month and day filters, and computes
//! the time, station, duration and user statistics over the filtered table.

pub mod aggregator;
pub mod analysis;
pub mod filter;
pub mod reader;

pub use bikeshare_core as core;
