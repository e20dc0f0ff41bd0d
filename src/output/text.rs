//! Plain-text report formatters.
//!
//! Two reports are written to standard output during a run:
//!
//! - [`ScanReport`]: every size group found by the scan, including sizes
//!   with a single file
//! - [`DuplicateReport`]: confirmed duplicates with their digest and the
//!   ordinal used to select them for deletion
//!
//! # Format
//!
//! ```text
//! 10 bytes
//! Hash: 3f1c...
//! 1. /tmp/a.txt
//! 2. /tmp/b.txt
//!
//! ```

use std::io::{self, Write};

use crate::config::SortOrder;
use crate::duplicates::{enumerate, DuplicateIndex, SizeIndex};

/// Formatter for the scan report.
pub struct ScanReport<'a> {
    index: &'a SizeIndex,
    order: SortOrder,
}

impl<'a> ScanReport<'a> {
    /// Create a new scan report formatter.
    #[must_use]
    pub fn new(index: &'a SizeIndex, order: SortOrder) -> Self {
        Self { index, order }
    }

    /// Write the report to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for size in self.index.ordered_sizes(self.order) {
            writeln!(writer, "{} bytes", size)?;
            for path in self.index.paths(size) {
                writeln!(writer, "{}", path.display())?;
            }
            writeln!(writer)?;
        }
        writer.flush()
    }
}

/// Formatter for the numbered duplicate report.
pub struct DuplicateReport<'a> {
    index: &'a DuplicateIndex,
    order: SortOrder,
}

impl<'a> DuplicateReport<'a> {
    /// Create a new duplicate report formatter.
    #[must_use]
    pub fn new(index: &'a DuplicateIndex, order: SortOrder) -> Self {
        Self { index, order }
    }

    /// Write the report to the given writer.
    ///
    /// Headers are emitted while walking [`enumerate`], so the printed
    /// numbers are exactly the ordinals the deleter will use.
    ///
    /// Returns the highest ordinal printed (0 when there are no duplicates).
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<usize> {
        let mut current: Option<(u64, &str)> = None;
        let mut max_ordinal = 0;

        for file in enumerate(self.index, self.order) {
            match current {
                Some((size, _)) if size != file.size => {
                    writeln!(writer)?;
                    writeln!(writer, "{} bytes", file.size)?;
                    writeln!(writer, "Hash: {}", file.digest)?;
                }
                Some((_, digest)) if digest != file.digest => {
                    writeln!(writer, "Hash: {}", file.digest)?;
                }
                Some(_) => {}
                None => {
                    writeln!(writer, "{} bytes", file.size)?;
                    writeln!(writer, "Hash: {}", file.digest)?;
                }
            }
            current = Some((file.size, file.digest));

            writeln!(writer, "{}. {}", file.ordinal, file.path.display())?;
            max_ordinal = file.ordinal;
        }

        if current.is_some() {
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(max_ordinal)
    }
}
