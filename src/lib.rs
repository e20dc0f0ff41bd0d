//! dupsweep - Interactive Duplicate File Finder
//!
//! Scans a directory tree, groups files by size, confirms duplicates with a
//! streaming BLAKE3 content hash, numbers every duplicate, and deletes the
//! numbers the user picks while tracking freed space.

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod scanner;

use std::io;

use crate::app::{run_session, Presets};
use crate::cli::Cli;
use crate::error::ExitCode;
use crate::prompt::Terminal;

/// Run the application against the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error wrapping [`error::AppError`] when the run aborts; use
/// [`error::exit_code_for`] to map it to an exit code.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let presets = Presets {
        extension: cli.extension,
        order: cli.sort,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    let outcome = run_session(cli.path, &presets, &mut terminal)?;
    log::debug!("Run finished: {:?}", outcome);

    Ok(ExitCode::Success)
}
