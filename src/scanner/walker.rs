//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting the size of every regular file that passes the
//! extension filter.
//!
//! # Features
//!
//! - Single-threaded traversal with entries sorted by file name, so the
//!   discovery order is identical between runs over the same tree
//! - Directories are descended into but never reported
//! - Symbolic links and other non-regular files are skipped
//! - Extension filtering via [`ExtensionFilter`]
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::config::ExtensionFilter;
//! use dupsweep::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), ExtensionFilter::any());
//! let files: Result<Vec<_>, _> = walker.walk().collect();
//! println!("Found {} files", files.unwrap().len());
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileEntry, ScanError};
use crate::config::ExtensionFilter;

/// Directory walker for file discovery.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Extension filter for files
    filter: ExtensionFilter,
}

impl Walker {
    /// Create a new walker for the given path.
    #[must_use]
    pub fn new(path: &Path, filter: ExtensionFilter) -> Self {
        Self {
            root: path.to_path_buf(),
            filter,
        }
    }

    /// Walk the directory tree, yielding file entries in discovery order.
    ///
    /// Errors are yielded as [`ScanError`] values; callers treat them as
    /// fatal and stop at the first one.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry),
                Err(e) => Some(Err(self.handle_walk_error(e))),
            })
    }

    /// Turn a directory entry into a [`FileEntry`] if it qualifies.
    fn process_entry(&self, entry: DirEntry) -> Option<Result<FileEntry, ScanError>> {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            return None;
        }

        if !file_type.is_file() {
            log::trace!("Skipping non-regular file: {}", entry.path().display());
            return None;
        }

        if !self.filter.matches(entry.path()) {
            log::trace!("Skipping file due to extension filter: {}", entry.path().display());
            return None;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => return Some(Err(self.handle_walk_error(e))),
        };

        Some(Ok(FileEntry::new(entry.into_path(), metadata.len())))
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        match error.io_error().map(std::io::Error::kind) {
            Some(ErrorKind::PermissionDenied) => {
                log::error!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path)
            }
            Some(ErrorKind::NotFound) => {
                log::error!("Path vanished during scan: {}", path.display());
                ScanError::NotFound(path)
            }
            _ => {
                log::error!("Walker error for {}: {}", path.display(), error);
                ScanError::Io {
                    path,
                    source: error.into(),
                }
            }
        }
    }
}
