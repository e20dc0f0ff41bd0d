//! The interactive run, from startup checks to deletion.
//!
//! Each stage takes the previous stage's output and hands a new value to
//! the next one:
//!
//! ```text
//! validate root -> RunConfig -> SizeIndex -> scan report
//!   -> "Check for duplicates?" -> DuplicateIndex -> duplicate report
//!   -> "Delete files?" -> Selection -> DeleteReport
//! ```
//!
//! A "no" answer ends the run successfully. Invalid answers are re-asked by
//! the [`Terminal`]; only fatal errors leave through [`AppError`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::actions::{apply_selection, DeleteReport};
use crate::config::{validate_root, ExtensionFilter, RunConfig, SortOrder};
use crate::duplicates::{group_duplicates, DuplicateIndex, SizeIndex};
use crate::error::AppError;
use crate::output::{DuplicateReport, ScanReport};
use crate::prompt::Terminal;
use crate::scanner::{FileDigest, Hasher};

/// Answers supplied up front instead of interactively.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    /// Raw extension answer (normalized like an interactive answer)
    pub extension: Option<String>,
    /// Sort order
    pub order: Option<SortOrder>,
}

/// What a completed run did.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Number of files in the scan
    pub scanned_files: usize,
    /// Number of confirmed duplicate files, if the check was requested
    pub duplicate_files: Option<usize>,
    /// Deletion results, if a non-empty selection was applied
    pub deletion: Option<DeleteReport>,
}

/// Run the full interactive session with the default BLAKE3 hasher.
///
/// # Errors
///
/// Returns an [`AppError`] for every fatal condition: invalid root,
/// traversal failure, hashing failure, unreadable input or unwritable
/// output.
pub fn run_session<R: BufRead, W: Write>(
    root: Option<PathBuf>,
    presets: &Presets,
    terminal: &mut Terminal<R, W>,
) -> Result<RunOutcome, AppError> {
    run_session_with(root, presets, terminal, &Hasher::new())
}

/// Run the full interactive session, hashing through `digester`.
///
/// # Errors
///
/// See [`run_session`].
pub fn run_session_with<R, W, D>(
    root: Option<PathBuf>,
    presets: &Presets,
    terminal: &mut Terminal<R, W>,
    digester: &D,
) -> Result<RunOutcome, AppError>
where
    R: BufRead,
    W: Write,
    D: FileDigest + ?Sized,
{
    let config = configure(root, presets, terminal)?;
    log::info!(
        "Configuration: root={}, extension={}, order={}",
        config.root.display(),
        config.extension,
        config.order
    );

    let sizes = SizeIndex::build(&config.root, &config.extension)?;
    ScanReport::new(&sizes, config.order).write_to(terminal.output())?;

    let mut outcome = RunOutcome {
        scanned_files: sizes.file_count(),
        ..Default::default()
    };

    if !terminal.ask_yes_no("Check for duplicates?")? {
        return Ok(outcome);
    }

    let (duplicates, _stats) = group_duplicates(&sizes, digester)?;
    outcome.duplicate_files = Some(duplicates.file_count());

    let max_ordinal = DuplicateReport::new(&duplicates, config.order).write_to(terminal.output())?;
    if max_ordinal == 0 {
        terminal.say("No duplicates found.")?;
        return Ok(outcome);
    }

    outcome.deletion = delete_stage(&duplicates, config.order, max_ordinal, terminal)?;
    Ok(outcome)
}

/// Validate the root and resolve the extension and sort order.
fn configure<R: BufRead, W: Write>(
    root: Option<PathBuf>,
    presets: &Presets,
    terminal: &mut Terminal<R, W>,
) -> Result<RunConfig, AppError> {
    let root = validate_root(root)?;

    let extension = match &presets.extension {
        Some(raw) => ExtensionFilter::new(raw),
        None => terminal.ask_extension()?,
    };

    let order = match presets.order {
        Some(order) => order,
        None => terminal.ask_sort_order()?,
    };

    Ok(RunConfig::new(root, extension, order))
}

/// Ask whether to delete, collect the selection and apply it.
fn delete_stage<R: BufRead, W: Write>(
    duplicates: &DuplicateIndex,
    order: SortOrder,
    max_ordinal: usize,
    terminal: &mut Terminal<R, W>,
) -> Result<Option<DeleteReport>, AppError> {
    if !terminal.ask_yes_no("Delete files?")? {
        return Ok(None);
    }

    let selection = terminal.ask_selection(max_ordinal)?;
    if selection.is_empty() {
        log::info!("Empty selection, nothing deleted");
        return Ok(None);
    }

    let report = apply_selection(duplicates, order, &selection);
    for failure in &report.failures {
        terminal.say(format_args!("Could not delete: {}", failure))?;
    }
    terminal.say(format_args!(
        "Total freed up space: {} bytes",
        report.bytes_freed
    ))?;

    Ok(Some(report))
}
