//! Console views for the bikeshare explorer.
//!
//! Renders the statistics reports and raw trip rows as plain text into any
//! [`std::io::Write`] sink.

pub mod raw_view;
pub mod report_view;

pub use bikeshare_core as core;
