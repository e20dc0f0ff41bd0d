//! Validation of user-entered file numbers.
//!
//! Input is a whitespace-separated list of ordinals. Validation is
//! all-or-nothing: one malformed or out-of-range token rejects the whole
//! line, including the valid tokens in it.

use std::collections::BTreeSet;

use thiserror::Error;

/// Why a selection line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A token is not an integer.
    #[error("'{0}' is not a file number")]
    NotANumber(String),

    /// A token is an integer outside `1..=max`.
    #[error("{value} is out of range (expected 1-{max})")]
    OutOfRange {
        /// The offending number
        value: i64,
        /// Highest valid ordinal
        max: usize,
    },
}

/// A validated set of ordinals, each within `1..=max`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ordinals: BTreeSet<usize>,
}

impl Selection {
    /// Check whether `ordinal` was selected.
    #[must_use]
    pub fn contains(&self, ordinal: usize) -> bool {
        self.ordinals.contains(&ordinal)
    }

    /// Number of distinct selected ordinals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    /// Check if nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Selected ordinals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ordinals.iter().copied()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            ordinals: iter.into_iter().collect(),
        }
    }
}

/// Parse and validate a line of ordinals against `max`.
///
/// An empty (or all-whitespace) line is zero tokens and yields an empty
/// selection. Repeated ordinals collapse into one.
///
/// # Errors
///
/// Returns the first [`SelectionError`] found; no partial selection is
/// ever returned.
///
/// # Example
///
/// ```
/// use dupsweep::actions::parse_selection;
///
/// let selection = parse_selection("3 1", 5).unwrap();
/// assert!(selection.contains(1) && selection.contains(3));
///
/// assert!(parse_selection("3 x 5", 5).is_err());
/// assert!(parse_selection("6", 5).is_err());
/// ```
pub fn parse_selection(raw: &str, max: usize) -> Result<Selection, SelectionError> {
    raw.split_whitespace()
        .map(|token| parse_token(token, max))
        .collect()
}

fn parse_token(token: &str, max: usize) -> Result<usize, SelectionError> {
    let value: i64 = token
        .parse()
        .map_err(|_| SelectionError::NotANumber(token.to_string()))?;

    match usize::try_from(value) {
        Ok(ordinal) if (1..=max).contains(&ordinal) => Ok(ordinal),
        _ => Err(SelectionError::OutOfRange { value, max }),
    }
}
