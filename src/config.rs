//! Run configuration.
//!
//! This module holds the validated settings a run is driven by: the root
//! directory, the extension filter and the size sort order. Values arrive
//! either as CLI presets or as answers to interactive prompts; both paths
//! go through the same constructors so invalid input is rejected at the
//! boundary and never silently defaulted.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::StartupError;

/// Order in which size groups are listed and numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Largest files first (menu option 1)
    Descending,
    /// Smallest files first (menu option 2)
    Ascending,
}

impl SortOrder {
    /// Parse an interactive menu answer.
    ///
    /// Only `1` (descending) and `2` (ascending) are accepted; anything else,
    /// including non-numeric input, yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use dupsweep::config::SortOrder;
    ///
    /// assert_eq!(SortOrder::from_option("1"), Some(SortOrder::Descending));
    /// assert_eq!(SortOrder::from_option("2"), Some(SortOrder::Ascending));
    /// assert_eq!(SortOrder::from_option("3"), None);
    /// assert_eq!(SortOrder::from_option("up"), None);
    /// ```
    #[must_use]
    pub fn from_option(answer: &str) -> Option<Self> {
        match answer.trim().parse::<u32>() {
            Ok(1) => Some(Self::Descending),
            Ok(2) => Some(Self::Ascending),
            _ => None,
        }
    }

    /// Return `sizes` sorted in this order.
    #[must_use]
    pub fn sorted(self, sizes: impl IntoIterator<Item = u64>) -> Vec<u64> {
        let mut sizes: Vec<u64> = sizes.into_iter().collect();
        match self {
            Self::Descending => sizes.sort_unstable_by(|a, b| b.cmp(a)),
            Self::Ascending => sizes.sort_unstable(),
        }
        sizes
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Descending => write!(f, "descending"),
            SortOrder::Ascending => write!(f, "ascending"),
        }
    }
}

/// File extension filter applied during the scan.
///
/// An empty filter matches every file. Otherwise a file matches when its
/// extension equals the filter exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extension: Option<String>,
}

impl ExtensionFilter {
    /// Build a filter from user input.
    ///
    /// Surrounding whitespace and dots are stripped, so `".txt"`, `"txt"`
    /// and `" .txt "` are equivalent.
    ///
    /// # Example
    ///
    /// ```
    /// use dupsweep::config::ExtensionFilter;
    /// use std::path::Path;
    ///
    /// let filter = ExtensionFilter::new(".txt");
    /// assert!(filter.matches(Path::new("notes.txt")));
    /// assert!(!filter.matches(Path::new("notes.TXT")));
    /// assert!(ExtensionFilter::new("").matches(Path::new("anything")));
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let normalized = raw.trim().trim_matches('.');
        Self {
            extension: (!normalized.is_empty()).then(|| normalized.to_string()),
        }
    }

    /// A filter that matches every file.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// The normalized extension, or `None` for match-all.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Check whether `path` passes this filter.
    ///
    /// The extension is the text after the last `.` of the file name, so a
    /// dotfile such as `.bashrc` has the extension `bashrc`.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        match &self.extension {
            None => true,
            Some(ext) => file_extension(path) == Some(ext.as_bytes()),
        }
    }
}

/// Bytes after the last `.` of the file name, if there is one.
fn file_extension(path: &Path) -> Option<&[u8]> {
    let name = path.file_name()?.as_encoded_bytes();
    let dot = name.iter().rposition(|&b| b == b'.')?;
    Some(&name[dot + 1..])
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            None => write!(f, "*"),
            Some(ext) => write!(f, ".{ext}"),
        }
    }
}

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Extension filter for discovered files
    pub extension: ExtensionFilter,
    /// Size ordering for reports and numbering
    pub order: SortOrder,
}

impl RunConfig {
    /// Assemble a run configuration from already-validated parts.
    #[must_use]
    pub fn new(root: PathBuf, extension: ExtensionFilter, order: SortOrder) -> Self {
        Self {
            root,
            extension,
            order,
        }
    }
}

/// Validate the root directory argument.
///
/// # Errors
///
/// - [`StartupError::MissingDirectory`] if no path was given
/// - [`StartupError::DirectoryNotFound`] if the path does not exist
/// - [`StartupError::NotADirectory`] if the path is not a directory
pub fn validate_root(path: Option<PathBuf>) -> Result<PathBuf, StartupError> {
    let path = path.ok_or(StartupError::MissingDirectory)?;

    if !path.exists() {
        return Err(StartupError::DirectoryNotFound(path));
    }
    if !path.is_dir() {
        return Err(StartupError::NotADirectory(path));
    }

    log::debug!("Scan root: {}", path.display());
    Ok(path)
}
