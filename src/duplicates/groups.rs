//! Size index and duplicate index structures.
//!
//! # Overview
//!
//! [`SizeIndex`] maps every file size seen during the scan to the paths of
//! that size, in discovery order. It is the input to the duplicate grouper,
//! which only hashes sizes shared by two or more files.
//!
//! [`DuplicateIndex`] is the grouper's output: size to digest to paths,
//! holding only digest buckets with at least two paths.
//!
//! Both are backed by `BTreeMap`, so every traversal over them is a pure
//! function of their contents.
//!
//! # Example
//!
//! ```
//! use dupsweep::duplicates::SizeIndex;
//! use dupsweep::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     FileEntry::new(PathBuf::from("/file1.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/file2.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/file3.txt"), 2048),
//! ];
//!
//! let index = SizeIndex::from_entries(files);
//!
//! assert_eq!(index.file_count(), 3);
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.paths(1024).len(), 2);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{ExtensionFilter, SortOrder};
use crate::scanner::{FileEntry, ScanError, Walker};

/// Files grouped by exact size, in discovery order within each size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeIndex {
    groups: BTreeMap<u64, Vec<PathBuf>>,
}

impl SizeIndex {
    /// Walk `root` and index every file passing `filter` by its size.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`] raised by the walk; a traversal
    /// failure aborts indexing.
    pub fn build(root: &Path, filter: &ExtensionFilter) -> Result<Self, ScanError> {
        log::info!("Scanning {} (filter: {})", root.display(), filter);

        let walker = Walker::new(root, filter.clone());
        let entries = walker.walk().collect::<Result<Vec<_>, _>>()?;
        let index = Self::from_entries(entries);

        log::info!(
            "Scan complete: {} files in {} size groups",
            index.file_count(),
            index.len()
        );
        Ok(index)
    }

    /// Build an index from already-discovered entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = FileEntry>) -> Self {
        let mut groups: BTreeMap<u64, Vec<PathBuf>> = BTreeMap::new();
        for entry in entries {
            groups.entry(entry.size).or_default().push(entry.path);
        }
        Self { groups }
    }

    /// Number of distinct sizes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no files were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of indexed files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Paths with exactly `size` bytes, in discovery order.
    #[must_use]
    pub fn paths(&self, size: u64) -> &[PathBuf] {
        self.groups.get(&size).map_or(&[][..], Vec::as_slice)
    }

    /// Iterate over `(size, paths)` pairs in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[PathBuf])> {
        self.groups.iter().map(|(size, paths)| (*size, paths.as_slice()))
    }

    /// Sizes in the requested order.
    #[must_use]
    pub fn ordered_sizes(&self, order: SortOrder) -> Vec<u64> {
        order.sorted(self.groups.keys().copied())
    }
}

/// Digest buckets within a single size: digest to paths.
pub type DigestBuckets = BTreeMap<String, Vec<PathBuf>>;

/// Confirmed duplicates: size to digest to paths.
///
/// Every retained size has at least one bucket, and every bucket holds at
/// least two paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateIndex {
    groups: BTreeMap<u64, DigestBuckets>,
}

impl DuplicateIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the buckets for `size`, pruning single-path buckets.
    ///
    /// Returns the number of buckets retained. A size whose buckets are all
    /// pruned is not inserted at all.
    pub fn insert(&mut self, size: u64, mut buckets: DigestBuckets) -> usize {
        buckets.retain(|digest, paths| {
            if paths.len() < 2 {
                log::trace!("Pruning unique digest {} ({} bytes)", digest, size);
                false
            } else {
                true
            }
        });

        let retained = buckets.len();
        if retained > 0 {
            self.groups.insert(size, buckets);
        }
        retained
    }

    /// Number of sizes with at least one duplicate bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of duplicate-eligible files (the highest ordinal).
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Total number of digest buckets across all sizes.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Digest buckets for `size`, if any.
    #[must_use]
    pub fn buckets(&self, size: u64) -> Option<&DigestBuckets> {
        self.groups.get(&size)
    }

    /// Sizes present in the index, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = u64> + '_ {
        self.groups.keys().copied()
    }

    /// Bytes that would be freed by keeping one copy per bucket.
    #[must_use]
    pub fn reclaimable_bytes(&self) -> u64 {
        self.groups
            .iter()
            .flat_map(|(size, buckets)| {
                buckets
                    .values()
                    .map(move |paths| size * (paths.len() as u64 - 1))
            })
            .sum()
    }
}
