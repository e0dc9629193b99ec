//! Run outcome reporting.
//!
//! Pure presentation: given a pipeline outcome, render the structured
//! `cron.*` status line and pick the process exit code. Nothing is retained
//! between runs.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::process::ExitCode;

use trackerlog_types::MonthSpec;

/// Application exit codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    Failure = 1,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Final outcome of one archival run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were archived.
    Success {
        month: MonthSpec,
        count: usize,
        path: PathBuf,
    },
    /// Nothing to archive for the month; a success, not an error.
    NoData { month: MonthSpec },
    /// A pipeline stage failed.
    Failure { stage: &'static str, message: String },
    /// The `--month` value was rejected before anything else ran.
    InvalidInput { month: String },
}

impl RunOutcome {
    /// `cron.<level>` level for the status line.
    pub fn level(&self) -> &'static str {
        match self {
            Self::Success { .. } | Self::NoData { .. } => "info",
            Self::Failure { .. } | Self::InvalidInput { .. } => "error",
        }
    }

    /// Whether this outcome goes to stderr.
    pub fn is_error(&self) -> bool {
        self.level() == "error"
    }

    /// Render the structured status line for this outcome.
    pub fn render(&self, now: NaiveDateTime) -> String {
        let text = match self {
            Self::Success { month, count, path } => format!(
                "Tracker data for month {month} ({count} records) moved to log file: {}",
                path.display()
            ),
            Self::NoData { month } => {
                format!("No tracker data found for month: {month}")
            }
            Self::Failure { stage, message } => format!("Error {stage}: {message}"),
            Self::InvalidInput { .. } => {
                "Invalid month format. Please use 'YYYY-MM'.".to_string()
            }
        };
        status_line(now, self.level(), &text)
    }

    /// Exit code mapping: NoData counts as success.
    pub fn exit(&self) -> Exit {
        match self {
            Self::Success { .. } | Self::NoData { .. } => Exit::Success,
            Self::Failure { .. } | Self::InvalidInput { .. } => Exit::Failure,
        }
    }
}

/// Info line emitted after month validation, before extraction.
pub fn start_line(month: &MonthSpec, now: NaiveDateTime) -> String {
    status_line(
        now,
        "info",
        &format!("Start processing tracker data for month: {month}"),
    )
}

fn status_line(now: NaiveDateTime, level: &str, text: &str) -> String {
    format!(
        "[{}] cron.{level}: [user] system, [task] {text}",
        now.format("%Y-%m-%d %H:%M:%S")
    )
}
