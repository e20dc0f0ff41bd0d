//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based file grouping ([`SizeIndex`])
//! - Content hashing of size collisions ([`group_duplicates`])
//! - Stable ordinal numbering of confirmed duplicates ([`enumerate`])

pub mod finder;
pub mod groups;
pub mod ordinals;

pub use finder::{group_duplicates, GroupingStats};
pub use groups::{DigestBuckets, DuplicateIndex, SizeIndex};
pub use ordinals::{enumerate, ordered_sizes, NumberedFile};
