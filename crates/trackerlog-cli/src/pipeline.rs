//! The archival pipeline.
//!
//! Strict sequential composition: month resolution, extraction,
//! classification and formatting, append, report. Each stage's output is
//! the next stage's sole input; every failure is converted into a single
//! [`RunOutcome`] here rather than bubbling out of the process.

use chrono::NaiveDateTime;
use tracing::info;

use trackerlog_archival::{ArchiveWriter, LineFormatter};
use trackerlog_store::TrackerStore;
use trackerlog_types::{MonthError, MonthSpec};

use crate::config::TrackerlogConfig;
use crate::report::{self, RunOutcome};

/// Run one archival pass for the (possibly defaulted) month.
///
/// `now` is injected so tests can pin the clock; it is read once for month
/// defaulting and once per emitted status line.
pub fn run(
    month: Option<&str>,
    config: &TrackerlogConfig,
    now: impl Fn() -> NaiveDateTime,
) -> RunOutcome {
    let spec = match MonthSpec::resolve(month, now()) {
        Ok(spec) => spec,
        Err(MonthError::InvalidFormat(raw)) => {
            return RunOutcome::InvalidInput { month: raw };
        }
    };

    println!("{}", report::start_line(&spec, now()));
    info!(month = %spec, database = %config.database_path.display(), "starting archival run");

    let store = match TrackerStore::open(&config.database_path) {
        Ok(store) => store,
        Err(err) => {
            return RunOutcome::Failure {
                stage: "opening tracker store",
                message: err.to_string(),
            };
        }
    };

    let records = match store.records_for_month(&spec) {
        Ok(records) => records,
        Err(err) => {
            return RunOutcome::Failure {
                stage: "reading tracker data",
                message: err.to_string(),
            };
        }
    };

    if records.is_empty() {
        return RunOutcome::NoData { month: spec };
    }

    let formatter = LineFormatter::new();
    let lines: Vec<String> = records
        .iter()
        .map(|record| formatter.format_line(record))
        .collect();

    let writer = ArchiveWriter::new(&config.log_root);
    let target = writer.target(&spec);
    if let Err(err) = writer.append(&target, &lines) {
        return RunOutcome::Failure {
            stage: "writing log file",
            message: err.to_string(),
        };
    }

    RunOutcome::Success {
        month: spec,
        count: records.len(),
        path: target.file,
    }
}
