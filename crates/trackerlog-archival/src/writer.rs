//! Append-only month log writer.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use trackerlog_types::MonthSpec;

/// Resolved `(directory, file)` pair for a month's archive.
///
/// The directory is keyed by year only, the file by the full month:
/// `<root>/<year>/<YYYY-MM>.log`. Computed fresh each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTarget {
    /// Year directory, e.g. `<root>/2024`.
    pub dir: PathBuf,
    /// Month log file, e.g. `<root>/2024/2024-10.log`.
    pub file: PathBuf,
}

impl ArchiveTarget {
    /// Resolve the target paths for a month under `root`.
    pub fn for_month(root: impl AsRef<Path>, spec: &MonthSpec) -> Self {
        let dir = root.as_ref().join(spec.year_dir());
        let file = dir.join(spec.file_name());
        Self { dir, file }
    }
}

/// Archival write error.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create archive directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write archive file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes formatted lines into year/month archive files.
pub struct ArchiveWriter {
    root: PathBuf,
}

impl ArchiveWriter {
    /// Writer rooted at the archive base directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Target paths for a month under this writer's root.
    pub fn target(&self, spec: &MonthSpec) -> ArchiveTarget {
        ArchiveTarget::for_month(&self.root, spec)
    }

    /// Append all `lines` to the target file in one write.
    ///
    /// Creates the year directory (mode `0755` on Unix) if absent; creating
    /// an existing directory is a no-op. The file is opened in append mode
    /// and never truncated, so repeated runs for the same month accumulate.
    /// A created directory is not removed if the file write then fails; it
    /// is a harmless precondition for a retry.
    pub fn append(&self, target: &ArchiveTarget, lines: &[String]) -> Result<(), WriteError> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(&target.dir).map_err(|source| WriteError::CreateDir {
            path: target.dir.clone(),
            source,
        })?;

        let buffer = lines.concat();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&target.file)
            .map_err(|source| WriteError::WriteFile {
                path: target.file.clone(),
                source,
            })?;
        file.write_all(buffer.as_bytes())
            .map_err(|source| WriteError::WriteFile {
                path: target.file.clone(),
                source,
            })?;

        debug!(file = %target.file.display(), lines = lines.len(), "appended archive lines");
        Ok(())
    }
}
