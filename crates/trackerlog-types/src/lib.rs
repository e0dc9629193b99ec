//! Tracker record types for trackerlog.

mod month;
mod record;
mod severity;

pub use month::{MonthError, MonthSpec};
pub use record::TrackedRecord;
pub use severity::Severity;
