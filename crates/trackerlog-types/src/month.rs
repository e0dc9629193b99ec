//! Processing month validation and resolution.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated `(year, month)` pair identifying the processing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthSpec {
    year: i32,
    month: u32,
}

/// Month validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthError {
    /// Input did not match the required `YYYY-MM` pattern.
    #[error("invalid month format: {0:?} (expected YYYY-MM)")]
    InvalidFormat(String),
}

impl MonthSpec {
    /// Parse a strict `YYYY-MM` string (four digit year, month `01`-`12`).
    ///
    /// Rejects everything else before any store access happens, so a bad
    /// `--month` never reaches the database.
    pub fn parse(input: &str) -> Result<Self, MonthError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthError::InvalidFormat(input.to_string()));
        }

        let year: i32 = input[..4]
            .parse()
            .map_err(|_| MonthError::InvalidFormat(input.to_string()))?;
        let month: u32 = input[5..7]
            .parse()
            .map_err(|_| MonthError::InvalidFormat(input.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidFormat(input.to_string()));
        }

        Ok(Self { year, month })
    }

    /// Resolve the processing month from an optional `--month` value.
    ///
    /// Absent input defaults to the calendar month before `now`. The caller
    /// injects `now` so tests can pin the clock.
    pub fn resolve(input: Option<&str>, now: NaiveDateTime) -> Result<Self, MonthError> {
        match input {
            Some(raw) => Self::parse(raw),
            None => Ok(Self::previous(now)),
        }
    }

    /// The calendar month before `now`, rolling back across the year
    /// boundary (January resolves to December of the prior year).
    pub fn previous(now: NaiveDateTime) -> Self {
        if now.month() == 1 {
            Self {
                year: now.year() - 1,
                month: 12,
            }
        } else {
            Self {
                year: now.year(),
                month: now.month() - 1,
            }
        }
    }

    /// Four-digit year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component, `1`-`12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Name of the year directory the archive lives under, e.g. `"2024"`.
    pub fn year_dir(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Name of the month log file, e.g. `"2024-10.log"`.
    pub fn file_name(&self) -> String {
        format!("{self}.log")
    }
}

impl fmt::Display for MonthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
