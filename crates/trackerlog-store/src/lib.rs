//! Tracker store access for trackerlog.
//!
//! Reads audit rows from the `trackersql` table. The store is opened
//! read-only: this job archives records, it never deletes or rewrites them.

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use trackerlog_types::{MonthSpec, TrackedRecord};

/// Store access error. Extraction only fails at the transport/query layer;
/// an empty month is a valid result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("tracker store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
}

/// Handle on the tracker store.
pub struct TrackerStore {
    conn: Arc<Mutex<Connection>>,
}

impl TrackerStore {
    /// Open the store at `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an existing connection. Used by tests with in-memory databases.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// All rows whose timestamp falls in the given month, in store order.
    pub fn records_for_month(
        &self,
        spec: &MonthSpec,
    ) -> Result<Vec<TrackedRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT tanggal, usere, sqle FROM trackersql
             WHERE strftime('%Y-%m', tanggal) = ?1",
        )?;

        let rows = stmt.query_map([spec.to_string()], |row| {
            Ok(TrackedRecord {
                timestamp: row.get(0)?,
                actor: row.get(1)?,
                statement: row.get(2)?,
            })
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(month = %spec, count = records.len(), "extracted tracker records");
        Ok(records)
    }
}
