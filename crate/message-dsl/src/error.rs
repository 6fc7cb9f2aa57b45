// std imports
use std::{fmt, slice, vec};

// third-party imports
use thiserror::Error;

// local imports
use crate::position::Position;

// ---

/// A single positioned error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{pos}: {error}")]
pub struct ErrorEntry {
    pub error: String,
    pub pos: Position,
}

// ---

/// Ordered collection of errors reported while scanning and parsing a file.
///
/// Entries are kept in the order they were added and never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<ErrorEntry>);

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, error: impl Into<String>, pos: Position) {
        self.0.push(ErrorEntry {
            error: error.into(),
            pos,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ErrorEntry> {
        self.0.iter()
    }

    /// Returns the first error followed by a count of the remaining ones.
    pub fn error_message(&self) -> String {
        match self.0.as_slice() {
            [] => "no errors".into(),
            [first] => first.to_string(),
            [first, rest @ ..] => format!("{} (and {} more errors)", first, rest.len()),
        }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_message())
    }
}

impl std::error::Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = ErrorEntry;
    type IntoIter = vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorEntry;
    type IntoIter = slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
