//! Severity classification for tracked statements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severity derived from a statement's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Row insertion.
    Info,
    /// Row modification.
    Warning,
    /// Row deletion.
    Error,
    /// Table truncation.
    Critical,
    /// Anything unrecognized (selects, DDL other than truncate, ...).
    Alert,
}

/// Ordered classification rules, first match wins. Matching is
/// case-sensitive substring search; the order is the tie-break when a
/// statement contains more than one keyword.
const RULES: &[(&str, Severity)] = &[
    ("insert", Severity::Info),
    ("update", Severity::Warning),
    ("delete", Severity::Error),
    ("truncate", Severity::Critical),
];

impl Severity {
    /// Classify a statement. Total: unmatched input is [`Severity::Alert`],
    /// never an error.
    pub fn classify(statement: &str) -> Self {
        RULES
            .iter()
            .find(|(pattern, _)| statement.contains(pattern))
            .map(|&(_, severity)| severity)
            .unwrap_or(Self::Alert)
    }

    /// Lowercase label as it appears in archived lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
