//! Output formatters for scan results.
//!
//! Reports are plain text written to any [`std::io::Write`] sink:
//! - [`ScanReport`]: all files grouped by size
//! - [`DuplicateReport`]: confirmed duplicates, numbered for selection
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::config::{ExtensionFilter, SortOrder};
//! use dupsweep::duplicates::SizeIndex;
//! use dupsweep::output::ScanReport;
//! use std::path::Path;
//!
//! let index = SizeIndex::build(Path::new("."), &ExtensionFilter::any()).unwrap();
//! ScanReport::new(&index, SortOrder::Descending)
//!     .write_to(std::io::stdout())
//!     .unwrap();
//! ```

pub mod text;

// Re-export main types
pub use text::{DuplicateReport, ScanReport};
