//! Interactive runtime for the bikeshare explorer.
//!
//! Wires prompt input, data loading, report rendering and raw-data paging
//! into the restartable session loop.

pub mod console;
pub mod paginator;
pub mod prompt;
pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
