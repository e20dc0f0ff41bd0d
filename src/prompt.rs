//! Interactive question/answer port.
//!
//! [`Terminal`] pairs a line-based input with an output sink. Every answer
//! is returned trimmed. The `ask_*` methods implement the validation loops:
//! a malformed answer prints a short complaint and the same question is
//! asked again, indefinitely. Only a closed or failing input ends a loop
//! early, as a [`PromptError`].
//!
//! # Example
//!
//! ```
//! use dupsweep::prompt::Terminal;
//! use std::io::Cursor;
//!
//! let mut terminal = Terminal::new(Cursor::new("maybe\nyes\n"), Vec::new());
//! assert!(terminal.ask_yes_no("Check for duplicates?").unwrap());
//!
//! let output = String::from_utf8(terminal.into_output()).unwrap();
//! assert_eq!(output, "Check for duplicates?\nWrong option\n");
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::actions::{parse_selection, Selection};
use crate::config::{ExtensionFilter, SortOrder};

/// Complaint printed after an invalid menu or yes/no answer.
pub const WRONG_OPTION: &str = "Wrong option";

/// Complaint printed after an invalid list of file numbers.
pub const WRONG_FORMAT: &str = "Wrong format";

/// Error type for the prompt port.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended while a question was waiting for an answer.
    #[error("input closed before an answer was given")]
    Closed,

    /// Reading from the input failed.
    #[error("failed to read answer: {0}")]
    Read(#[source] io::Error),

    /// Writing a question failed.
    #[error("failed to write prompt: {0}")]
    Write(#[source] io::Error),
}

/// Line-based terminal: questions go to `output`, answers come from `input`.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output sink, for reports.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the terminal and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line and flush.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Write`] if the output fails.
    pub fn say(&mut self, line: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")
            .and_then(|()| self.output.flush())
            .map_err(PromptError::Write)
    }

    /// Read one answer line, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input, or
    /// [`PromptError::Read`] if reading fails.
    pub fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(PromptError::Closed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(PromptError::Read(e)),
        }
    }

    /// Print `question`, then read the answer.
    ///
    /// # Errors
    ///
    /// See [`Terminal::say`] and [`Terminal::read_answer`].
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.say(question)?;
        self.read_answer()
    }

    /// Ask for the file extension filter. An empty answer matches all files.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer can be read.
    pub fn ask_extension(&mut self) -> Result<ExtensionFilter, PromptError> {
        let answer = self.ask("Enter file format:")?;
        Ok(ExtensionFilter::new(&answer))
    }

    /// Show the sorting menu and ask until `1` or `2` is entered.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer can be read.
    pub fn ask_sort_order(&mut self) -> Result<SortOrder, PromptError> {
        self.say("Size sorting options:")?;
        self.say("1. Descending")?;
        self.say("2. Ascending")?;

        loop {
            let answer = self.ask("Enter a sorting option:")?;
            match SortOrder::from_option(&answer) {
                Some(order) => return Ok(order),
                None => {
                    log::debug!("Rejected sorting option {:?}", answer);
                    self.say(WRONG_OPTION)?;
                }
            }
        }
    }

    /// Print `question` once, then read until exactly `yes` or `no`.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer can be read.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        self.say(question)?;

        loop {
            match self.read_answer()?.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                other => {
                    log::debug!("Rejected yes/no answer {:?}", other);
                    self.say(WRONG_OPTION)?;
                }
            }
        }
    }

    /// Ask for file numbers until a valid selection against `max` is entered.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer can be read.
    pub fn ask_selection(&mut self, max: usize) -> Result<Selection, PromptError> {
        loop {
            let answer = self.ask("Enter file numbers to delete:")?;
            match parse_selection(&answer, max) {
                Ok(selection) => return Ok(selection),
                Err(e) => {
                    log::debug!("Rejected selection {:?}: {}", answer, e);
                    self.say(WRONG_FORMAT)?;
                }
            }
        }
    }
}
