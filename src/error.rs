//! Structured error handling and exit codes.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::prompt::PromptError;
use crate::scanner::{HashError, ScanError};

/// Exit codes for the dupsweep application.
///
/// Each fatal error category has its own code so calling scripts can tell
/// which stage failed:
/// - 0: Success (including runs where nothing was deleted)
/// - 1: General error (unexpected failure or invalid command line, e.g.
///   stdout closed or an unknown flag)
/// - 2: Startup error (missing or invalid directory argument)
/// - 3: Scan error (directory traversal failed)
/// - 4: Hash error (a file could not be read while hashing)
/// - 5: Input error (stdin closed or unreadable while a question was pending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the run completed.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
    /// Startup error: the root directory argument was missing or invalid.
    StartupError = 2,
    /// Scan error: directory traversal failed.
    ScanError = 3,
    /// Hash error: a file could not be hashed.
    HashError = 4,
    /// Input error: no answer could be read from the user.
    InputError = 5,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::StartupError => "DS002",
            Self::ScanError => "DS003",
            Self::HashError => "DS004",
            Self::InputError => "DS005",
        }
    }
}

/// Problems with the root directory argument.
#[derive(Debug, Error)]
pub enum StartupError {
    /// No directory argument was given.
    #[error("Directory is not specified")]
    MissingDirectory,

    /// The directory argument does not exist.
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    /// The directory argument is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Fatal errors that abort a run.
///
/// Recoverable conditions (bad answers, bad file numbers, failed single-file
/// deletions) never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    /// The run could not start.
    #[error("startup failed: {0}")]
    Startup(#[from] StartupError),

    /// Directory traversal failed.
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    /// Hashing a candidate duplicate failed.
    #[error("hashing failed: {0}")]
    Hash(#[from] HashError),

    /// Reading an answer failed.
    #[error("input failed: {0}")]
    Input(#[from] PromptError),

    /// Writing a report failed.
    #[error("output failed: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Exit code for this error's category.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Startup(_) => ExitCode::StartupError,
            Self::Scan(_) => ExitCode::ScanError,
            Self::Hash(_) => ExitCode::HashError,
            Self::Input(PromptError::Write(_)) | Self::Output(_) => ExitCode::GeneralError,
            Self::Input(_) => ExitCode::InputError,
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DS003")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}

/// Exit code for a command-line parse failure.
///
/// `--help` and `--version` exit successfully; every usage error is a
/// [`ExitCode::GeneralError`], keeping code 2 for startup failures.
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
        _ => ExitCode::GeneralError,
    }
}

/// Map an error returned by [`crate::run_app`] to its exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<AppError>()
        .map_or(ExitCode::GeneralError, AppError::exit_code)
}
