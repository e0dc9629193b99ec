//! Command line interface for trackerlog.
//!
//! Wires the archival pipeline together: resolve the month, extract the
//! tracker records, classify and format them, append to the month's log
//! file, report the outcome.

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod report;

pub use cli::Cli;
pub use config::{ConfigError, TrackerlogConfig};
pub use report::{Exit, RunOutcome};
