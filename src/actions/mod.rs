//! File actions module.
//!
//! This module provides functionality for:
//! - Validating the file numbers a user enters ([`selection`])
//! - Deleting the selected duplicates and tracking freed space ([`delete`])
//!
//! ```no_run
//! use dupsweep::actions::{apply_selection, parse_selection};
//! use dupsweep::config::SortOrder;
//! use dupsweep::duplicates::DuplicateIndex;
//!
//! let index = DuplicateIndex::new();
//! let selection = parse_selection("1 2", index.file_count()).unwrap();
//! let report = apply_selection(&index, SortOrder::Ascending, &selection);
//! println!("Total freed up space: {} bytes", report.bytes_freed);
//! ```

pub mod delete;
pub mod selection;

// Re-export commonly used types
pub use delete::{apply_selection, remove_file, DeleteError, DeleteReport, DeletedFile};
pub use selection::{parse_selection, Selection, SelectionError};
