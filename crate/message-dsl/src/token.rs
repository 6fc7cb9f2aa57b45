// std imports
use std::fmt;

// third-party imports
use strum::IntoStaticStr;

// local imports
use crate::position::Position;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum TokenKind {
    Invalid,
    Eof,
    SectionHeader,
    MessageKey,
    MessageText,
    MessageNewline,
    ReplacementStart,
    ReplacementType,
    ReplacementOptionStart,
    ReplacementOptionEnd,
    ReplacementEnd,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

// ---

/// A lexical token.
///
/// For `Invalid` tokens `text` holds the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::MessageNewline => f.write_str("newline"),
            TokenKind::ReplacementOptionEnd | TokenKind::ReplacementEnd => f.write_str("\"}\""),
            _ if self.text.is_empty() => write!(f, "{}", self.kind),
            _ => write!(f, "{:?}", self.text),
        }
    }
}
