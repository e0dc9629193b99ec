//! Month log archival for trackerlog.

pub mod line;
pub mod writer;

pub use line::LineFormatter;
pub use writer::{ArchiveTarget, ArchiveWriter, WriteError};
