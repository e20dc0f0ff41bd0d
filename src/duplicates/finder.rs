//! Duplicate grouping: size filter followed by content hashing.
//!
//! # Overview
//!
//! The grouper runs two filters in sequence:
//! 1. **Size**: sizes shared by fewer than two files are skipped without
//!    reading a byte, since such files cannot have a duplicate.
//! 2. **Digest**: every file in a colliding size group is hashed and bucketed
//!    by digest; buckets with a single file are pruned.
//!
//! Hashing cost is therefore bounded by the number of files that already
//! collide on size.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::config::ExtensionFilter;
//! use dupsweep::duplicates::{group_duplicates, SizeIndex};
//! use dupsweep::scanner::Hasher;
//! use std::path::Path;
//!
//! let sizes = SizeIndex::build(Path::new("."), &ExtensionFilter::any()).unwrap();
//! let (duplicates, stats) = group_duplicates(&sizes, &Hasher::new()).unwrap();
//!
//! println!("{} duplicate files in {} buckets", stats.duplicate_files, stats.duplicate_buckets);
//! # let _ = duplicates;
//! ```

use bytesize::ByteSize;

use super::groups::{DigestBuckets, DuplicateIndex, SizeIndex};
use crate::scanner::{FileDigest, HashError};

/// Statistics from the grouping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files in the size index
    pub total_files: usize,
    /// Number of distinct sizes
    pub unique_sizes: usize,
    /// Files skipped because no other file shares their size
    pub eliminated_unique: usize,
    /// Files whose content was hashed
    pub hashed_files: usize,
    /// Digest buckets with 2+ files
    pub duplicate_buckets: usize,
    /// Files in those buckets (the highest ordinal)
    pub duplicate_files: usize,
    /// Bytes freed by keeping exactly one copy per bucket
    pub reclaimable_bytes: u64,
}

impl GroupingStats {
    /// Percentage of files that never needed hashing.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.eliminated_unique as f64 / self.total_files as f64) * 100.0
        }
    }
}

/// Group the files of `sizes` into confirmed duplicate buckets.
///
/// Only sizes with two or more paths are hashed, through `digester`. Within
/// each bucket, paths keep their discovery order.
///
/// # Errors
///
/// Returns the first [`HashError`]; a file that cannot be read aborts the
/// whole pass and no partial index is returned.
pub fn group_duplicates<D>(
    sizes: &SizeIndex,
    digester: &D,
) -> Result<(DuplicateIndex, GroupingStats), HashError>
where
    D: FileDigest + ?Sized,
{
    let mut index = DuplicateIndex::new();
    let mut stats = GroupingStats {
        total_files: sizes.file_count(),
        unique_sizes: sizes.len(),
        ..Default::default()
    };

    for (size, paths) in sizes.iter() {
        if paths.len() < 2 {
            stats.eliminated_unique += paths.len();
            continue;
        }

        log::debug!("Hashing size group {} bytes: {} files", size, paths.len());

        let mut buckets = DigestBuckets::new();
        for path in paths {
            let digest = digester.digest(path)?;
            stats.hashed_files += 1;
            buckets.entry(digest).or_default().push(path.clone());
        }

        let retained = index.insert(size, buckets);
        if retained > 0 {
            log::debug!("Size {} bytes: {} duplicate bucket(s)", size, retained);
        }
    }

    stats.duplicate_buckets = index.bucket_count();
    stats.duplicate_files = index.file_count();
    stats.reclaimable_bytes = index.reclaimable_bytes();

    log::info!(
        "Hashed {} of {} files ({:.1}% skipped by size); {} duplicates in {} buckets, {} reclaimable",
        stats.hashed_files,
        stats.total_files,
        stats.elimination_rate(),
        stats.duplicate_files,
        stats.duplicate_buckets,
        ByteSize(stats.reclaimable_bytes)
    );

    Ok((index, stats))
}
