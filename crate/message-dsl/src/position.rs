// std imports
use std::{fmt, sync::Arc};

// third-party imports
use serde::Serialize;

// ---

/// Position of a rune in a source file.
///
/// `offset` is the byte offset of the last byte consumed so far, so a fresh
/// position starts at `-1`. `line` starts at 1 and `column` counts runes
/// within the current line, the first rune of a line being column 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub file: Arc<str>,
    pub line: usize,
    pub column: usize,
    pub offset: isize,
}

impl Position {
    /// Returns the position before the first rune of `file`. Lines are 1-based.
    pub fn new(file: impl Into<Arc<str>>) -> Self {
        Self {
            file: file.into(),
            line: 1,
            column: 0,
            offset: -1,
        }
    }

    /// Moves the position over `ch`.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8() as isize;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Moves to the start of the next line without consuming input.
    ///
    /// Used for line breaks not ending in `\n`, such as a lone `\r`.
    #[inline]
    pub fn break_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.file.is_empty() {
            write!(f, "{}:", self.file)?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}
