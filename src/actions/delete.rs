//! Deletion of selected duplicates.
//!
//! # Overview
//!
//! [`apply_selection`] re-runs the ordinal traversal of
//! [`crate::duplicates::enumerate`] over the duplicate index and removes
//! every file whose ordinal was selected. A failure on one file is recorded
//! and the batch continues; only successfully removed files count towards
//! the freed bytes.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::actions::{apply_selection, parse_selection};
//! use dupsweep::config::SortOrder;
//! use dupsweep::duplicates::DuplicateIndex;
//!
//! let index = DuplicateIndex::new();
//! let selection = parse_selection("", index.file_count()).unwrap();
//! let report = apply_selection(&index, SortOrder::Descending, &selection);
//! println!("{}", report.summary());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use thiserror::Error;

use super::selection::Selection;
use crate::config::SortOrder;
use crate::duplicates::{enumerate, DuplicateIndex};

/// Error type for a single file removal.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }

    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// A file that was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedFile {
    /// Ordinal the file was selected by
    pub ordinal: usize,
    /// Path that was deleted
    pub path: PathBuf,
    /// Size of the deleted file in bytes (as recorded at scan time)
    pub size: u64,
}

/// Results of applying a selection.
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Successfully deleted files.
    pub deleted: Vec<DeletedFile>,
    /// Failed deletions with their errors.
    pub failures: Vec<DeleteError>,
    /// Total bytes freed.
    pub bytes_freed: u64,
}

impl DeleteReport {
    /// Number of successful deletions.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.deleted.len()
    }

    /// Number of failed deletions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Check if all deletions succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "Deleted {} file(s), freed {}",
                self.success_count(),
                ByteSize(self.bytes_freed)
            )
        } else {
            format!(
                "Deleted {} file(s), {} failed, freed {}",
                self.success_count(),
                self.failure_count(),
                ByteSize(self.bytes_freed)
            )
        }
    }
}

/// Permanently remove a single file.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if deletion is not allowed
/// - `Io` for any other failure
pub fn remove_file(path: &Path) -> Result<(), DeleteError> {
    fs::remove_file(path).map_err(|e| DeleteError::from_io(path, e))
}

/// Delete every file of `index` whose ordinal is in `selection`.
///
/// Ordinals are assigned by the same traversal that numbered the duplicate
/// report, using the same `order`. Removal failures are logged and recorded
/// in the report; they never stop the batch.
#[must_use]
pub fn apply_selection(
    index: &DuplicateIndex,
    order: SortOrder,
    selection: &Selection,
) -> DeleteReport {
    let mut report = DeleteReport::default();

    for file in enumerate(index, order).filter(|f| selection.contains(f.ordinal)) {
        match remove_file(file.path) {
            Ok(()) => {
                log::info!("Deleted: {} ({} bytes)", file.path.display(), file.size);
                report.bytes_freed += file.size;
                report.deleted.push(DeletedFile {
                    ordinal: file.ordinal,
                    path: file.path.to_path_buf(),
                    size: file.size,
                });
            }
            Err(e) => {
                log::warn!("Failed to delete {}: {}", file.path.display(), e);
                report.failures.push(e);
            }
        }
    }

    log::info!("{}", report.summary());

    report
}
