//! Tracked audit records.

use serde::{Deserialize, Serialize};

/// A single audit entry read from the tracker store.
///
/// Immutable once fetched. The timestamp is carried verbatim as stored
/// (`YYYY-MM-DD HH:MM:SS` text) and is never reparsed or reformatted, so the
/// archived line preserves exactly what the store recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedRecord {
    /// Event occurrence time, as stored.
    pub timestamp: String,
    /// Identifier of the user/agent who performed the action.
    pub actor: String,
    /// Raw text of the action performed. Opaque, never executed.
    pub statement: String,
}
