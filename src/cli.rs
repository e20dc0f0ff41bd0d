//! Command-line interface definitions for dupsweep.
//!
//! This module defines the CLI arguments using the clap derive API. The
//! only required input is the directory to scan; the remaining options
//! either preset answers to the interactive questions or control logging.
//!
//! # Example
//!
//! ```bash
//! # Fully interactive
//! dupsweep ~/Downloads
//!
//! # Preset the file format and sort order, then answer the rest interactively
//! dupsweep ~/Downloads --extension jpg --sort ascending
//!
//! # Verbose mode for debugging (logs go to stderr)
//! dupsweep -v ~/Downloads
//! ```

use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::config::SortOrder;

/// Find duplicate files by size and content, then delete the ones you pick.
///
/// dupsweep groups the files under PATH by size, confirms duplicates with a
/// BLAKE3 content hash, numbers them, and deletes the numbers you enter.
#[derive(Debug, Parser)]
#[command(name = "dupsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory path to scan for duplicates
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// File extension to scan for (skips the "Enter file format" question)
    ///
    /// Leading dots are ignored; matching is case-sensitive.
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Size sort order (skips the sorting question)
    #[arg(short, long, value_enum, value_name = "ORDER")]
    pub sort: Option<SortOrder>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    ///
    /// Also set by a non-empty `NO_COLOR` environment variable.
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}
