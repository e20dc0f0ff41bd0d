//! Stable ordinal numbering over a [`DuplicateIndex`].
//!
//! The traversal order is sizes in the configured [`SortOrder`], then digest
//! buckets in ascending digest order, then paths in discovery order. A single
//! counter starting at 1 runs across the whole nested traversal.
//!
//! The order is a pure function of the index and the sort order, so the
//! duplicate report and the deleter, which both call [`enumerate`], always
//! agree on which path an ordinal refers to.

use std::path::Path;

use super::groups::DuplicateIndex;
use crate::config::SortOrder;

/// A duplicate file with its display ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedFile<'a> {
    /// 1-based position in the traversal
    pub ordinal: usize,
    /// Size in bytes shared by the file's size group
    pub size: u64,
    /// Content digest of the file's bucket
    pub digest: &'a str,
    /// Path of the file
    pub path: &'a Path,
}

/// Sizes of `index` in the requested order.
#[must_use]
pub fn ordered_sizes(index: &DuplicateIndex, order: SortOrder) -> Vec<u64> {
    order.sorted(index.sizes())
}

/// Walk every duplicate file in ordinal order.
///
/// # Example
///
/// ```
/// use dupsweep::config::SortOrder;
/// use dupsweep::duplicates::{enumerate, DigestBuckets, DuplicateIndex};
/// use std::path::PathBuf;
///
/// let mut index = DuplicateIndex::new();
/// let mut buckets = DigestBuckets::new();
/// buckets.insert("ab".into(), vec![PathBuf::from("/x"), PathBuf::from("/y")]);
/// index.insert(10, buckets);
///
/// let numbered: Vec<_> = enumerate(&index, SortOrder::Descending)
///     .map(|f| (f.ordinal, f.path.to_path_buf()))
///     .collect();
/// assert_eq!(numbered, vec![(1, PathBuf::from("/x")), (2, PathBuf::from("/y"))]);
/// ```
pub fn enumerate(
    index: &DuplicateIndex,
    order: SortOrder,
) -> impl Iterator<Item = NumberedFile<'_>> + '_ {
    ordered_sizes(index, order)
        .into_iter()
        .flat_map(move |size| {
            index
                .buckets(size)
                .into_iter()
                .flatten()
                .flat_map(move |(digest, paths)| {
                    paths.iter().map(move |path| (size, digest.as_str(), path.as_path()))
                })
        })
        .zip(1..)
        .map(|((size, digest, path), ordinal)| NumberedFile {
            ordinal,
            size,
            digest,
            path,
        })
}
