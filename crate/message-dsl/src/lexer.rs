// std imports
use std::{collections::VecDeque, sync::Arc};

// local imports
use crate::{
    position::Position,
    token::{Token, TokenKind},
};

// ---

const BOM: char = '\u{FEFF}';
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const UNCLOSED_REPLACEMENT: &str = "unclosed replacement ('}' expected)";

/// Maximum number of replacements open at the same time.
pub const MAX_NESTING: usize = 32;

// ---

/// Tokenizer for message files.
///
/// Tokens are produced lazily, the scanner only advances as far as needed to
/// yield the next token. Errors are reported as [`TokenKind::Invalid`] tokens.
/// After a structural error the iterator is exhausted without an
/// [`TokenKind::Eof`] token.
pub struct Lexer<'s> {
    src: &'s [u8],
    at: usize,
    pos: Position,
    stack: Vec<State>,
    pending: VecDeque<Token>,
}

impl<'s> Lexer<'s> {
    pub fn new(file: impl Into<Arc<str>>, src: &'s [u8]) -> Self {
        let mut pos = Position::new(file);
        let mut at = 0;
        if src.starts_with(UTF8_BOM) {
            at = UTF8_BOM.len();
            pos.offset += at as isize;
        }

        Self {
            src,
            at,
            pos,
            stack: vec![State::Root],
            pending: VecDeque::new(),
        }
    }

    #[inline]
    pub fn from_slice(src: &'s [u8]) -> Self {
        Self::new("", src)
    }

    // --- top level

    fn scan_root(&mut self) {
        loop {
            let mark = self.mark();
            self.skip_inline_space();
            if self.skip_newline() {
                continue;
            }
            if self.peek() == Rune::Eof {
                break;
            }
            if self.at != mark.at {
                self.reset(mark);
                let pos = self.next_pos();
                return self.fatal("unexpected indentation", pos);
            }
            break;
        }

        match self.peek() {
            Rune::Eof => {
                let pos = self.next_pos();
                self.emit(TokenKind::Eof, "", pos);
                self.stack = vec![State::Done];
            }
            Rune::Char('[') => self.scan_section_header(),
            Rune::Char('/') => self.scan_comment(),
            _ => self.scan_message_key(),
        }
    }

    fn scan_section_header(&mut self) {
        let pos = self.next_pos();
        if !self.starts_with("[[") {
            self.error("'[[' expected", pos);
            return self.skip_line();
        }
        self.bump();
        self.bump();
        self.skip_inline_space();

        let name_pos = self.next_pos();
        let name = self.scan_dotted_ident();
        if name.is_empty() {
            self.error("section name expected", name_pos);
            return self.skip_line();
        }

        self.skip_inline_space();
        if !self.starts_with("]]") {
            let pos = self.next_pos();
            self.error("']]' expected", pos);
            return self.skip_line();
        }
        self.bump();
        self.bump();
        self.emit(TokenKind::SectionHeader, name, pos);

        self.skip_inline_space();
        if !self.skip_newline() && self.peek() != Rune::Eof {
            let pos = self.next_pos();
            self.error("newline expected after section header", pos);
            self.skip_line();
        }
    }

    fn scan_comment(&mut self) {
        let pos = self.next_pos();
        if !self.starts_with("//") {
            self.error("'//' expected", pos);
            return self.skip_line();
        }

        loop {
            let rune = self.peek();
            match rune {
                Rune::Eof => return,
                Rune::Char('\n' | '\r') => {
                    self.skip_newline();
                    return;
                }
                _ => {
                    if let Some(msg) = rune.illegal() {
                        let pos = self.next_pos();
                        self.error(msg, pos);
                        return self.skip_line();
                    }
                    self.bump();
                }
            }
        }
    }

    fn scan_message_key(&mut self) {
        let pos = self.next_pos();
        let key = self.scan_ident();
        if key.is_empty() {
            let rune = self.peek();
            let msg = match rune.illegal() {
                Some(msg) => msg.to_owned(),
                None => format!("message key expected, found {}", rune),
            };
            self.error(msg, pos);
            return self.skip_message();
        }
        self.emit(TokenKind::MessageKey, key, pos);

        if self.peek() != Rune::Char(':') {
            let pos = self.next_pos();
            self.error("':' expected after message key", pos);
            return self.skip_message();
        }
        self.bump();
        self.skip_inline_space();

        if !self.skip_newline() && self.peek() != Rune::Eof {
            let pos = self.next_pos();
            self.error("newline expected after message key", pos);
            self.skip_line();
        }

        if self.indented_line() {
            self.stack.push(State::Body {
                nested: false,
                produced: false,
            });
        }
    }

    // --- message bodies

    fn scan_body(&mut self, nested: bool, produced: bool) {
        let pos = self.next_pos();
        match self.peek() {
            Rune::Eof if nested => self.fatal(UNCLOSED_REPLACEMENT, pos),
            Rune::Eof => {
                self.stack.pop();
            }
            Rune::Char('}') if nested => {
                self.stack.pop();
            }
            Rune::Char('}') => {
                self.error("unexpected '}'", pos);
                self.recover();
            }
            Rune::Char('\n' | '\r') => {
                if self.continuation() {
                    if produced {
                        self.emit(TokenKind::MessageNewline, "", pos);
                    }
                } else if nested {
                    self.error(UNCLOSED_REPLACEMENT, pos);
                    self.recover();
                } else {
                    self.stack.pop();
                }
            }
            _ if self.starts_with("${") => {
                if self.nesting() >= MAX_NESTING {
                    return self.fatal("replacement nesting too deep", pos);
                }
                self.set_produced();
                self.bump();
                self.bump();
                self.stack.push(State::Replacement(Stage::Key(pos)));
            }
            _ => self.scan_text(pos),
        }
    }

    fn scan_text(&mut self, pos: Position) {
        let mut text = String::new();
        loop {
            let rune = self.peek();
            match rune {
                Rune::Eof | Rune::Char('\n' | '\r' | '}') => break,
                Rune::Char('$') if self.starts_with("${") => break,
                Rune::Char(ch) if rune.illegal().is_none() => {
                    text.push(ch);
                    self.bump();
                }
                _ => {
                    self.flush_text(text, pos);
                    let pos = self.next_pos();
                    self.error(rune.illegal().unwrap_or("invalid character"), pos);
                    return self.recover();
                }
            }
        }
        self.flush_text(text, pos);
    }

    fn flush_text(&mut self, text: String, pos: Position) {
        if !text.is_empty() {
            self.set_produced();
            self.emit(TokenKind::MessageText, text, pos);
        }
    }

    // --- replacements

    fn scan_replacement(&mut self, stage: Stage) {
        match stage {
            Stage::Key(pos) => self.scan_replacement_key(pos),
            Stage::Options => self.scan_replacement_option(),
            Stage::OptionBody => {
                let pos = self.next_pos();
                if self.peek() == Rune::Char('}') {
                    self.bump();
                    self.emit(TokenKind::ReplacementOptionEnd, "}", pos);
                    self.set_stage(Stage::Options);
                } else {
                    self.error(UNCLOSED_REPLACEMENT, pos);
                    self.recover();
                }
            }
        }
    }

    fn scan_replacement_key(&mut self, pos: Position) {
        let key_pos = self.next_pos();
        let key = self.scan_ident();
        if key.is_empty() {
            self.error("replacement key expected", key_pos);
            return self.recover();
        }
        self.emit(TokenKind::ReplacementStart, key, pos);

        if self.peek() == Rune::Char(':') {
            self.bump();
            let type_pos = self.next_pos();
            let kind = self.scan_ident();
            if kind.is_empty() {
                self.error("replacement type expected", type_pos);
                return self.recover();
            }
            self.emit(TokenKind::ReplacementType, kind, type_pos);
        }

        self.set_stage(Stage::Options);
    }

    fn scan_replacement_option(&mut self) {
        if !self.fold() {
            let pos = self.next_pos();
            self.error(UNCLOSED_REPLACEMENT, pos);
            return self.recover();
        }

        let pos = self.next_pos();
        match self.peek() {
            Rune::Char('.') => {
                self.bump();
                let pos = self.next_pos();
                let name = match self.peek() {
                    Rune::Char('[') => self.scan_literal(),
                    rune => Some(self.scan_ident())
                        .filter(|name| !name.is_empty())
                        .ok_or_else(|| format!("replacement option name expected, found {}", rune)),
                };
                let name = match name {
                    Ok(name) => name,
                    Err(msg) => {
                        let pos = self.next_pos();
                        self.error(msg, pos);
                        return self.recover();
                    }
                };
                self.emit(TokenKind::ReplacementOptionStart, name, pos);

                if self.peek() == Rune::Char('{') {
                    self.bump();
                    self.set_stage(Stage::OptionBody);
                    self.stack.push(State::Body {
                        nested: true,
                        produced: false,
                    });
                } else {
                    let pos = self.next_pos();
                    self.emit(TokenKind::ReplacementOptionEnd, "", pos);
                }
            }
            Rune::Char('}') => {
                self.bump();
                self.emit(TokenKind::ReplacementEnd, "}", pos);
                self.stack.pop();
            }
            Rune::Eof => self.fatal(UNCLOSED_REPLACEMENT, pos),
            rune => {
                self.error(format!("unexpected {} in replacement", rune), pos);
                self.recover();
            }
        }
    }

    fn scan_literal(&mut self) -> Result<String, String> {
        let mut text = String::from("[");
        self.bump();
        loop {
            let rune = self.peek();
            match rune {
                Rune::Char(']') => {
                    self.bump();
                    text.push(']');
                    return Ok(text);
                }
                Rune::Eof | Rune::Char('\n' | '\r') => return Err("']' expected".into()),
                Rune::Char(ch) if rune.illegal().is_none() => {
                    text.push(ch);
                    self.bump();
                }
                _ => return Err(rune.illegal().unwrap_or("invalid character").into()),
            }
        }
    }

    // --- identifiers and whitespace

    fn scan_ident(&mut self) -> String {
        let mut ident = String::new();
        while let Rune::Char(ch) = self.peek() {
            let valid = if ident.is_empty() {
                ch.is_alphabetic() || ch == '_'
            } else {
                ch.is_alphanumeric() || ch == '_' || ch == '-'
            };
            if !valid {
                break;
            }
            ident.push(ch);
            self.bump();
        }
        ident
    }

    fn scan_dotted_ident(&mut self) -> String {
        let mut name = self.scan_ident();
        while !name.is_empty() && self.peek() == Rune::Char('.') {
            let mark = self.mark();
            self.bump();
            let part = self.scan_ident();
            if part.is_empty() {
                self.reset(mark);
                break;
            }
            name.push('.');
            name.push_str(&part);
        }
        name
    }

    fn skip_inline_space(&mut self) {
        while let Rune::Char(' ' | '\t') = self.peek() {
            self.bump();
        }
    }

    fn skip_newline(&mut self) -> bool {
        match self.peek() {
            Rune::Char('\n') => {
                self.bump();
                true
            }
            Rune::Char('\r') => {
                self.bump();
                if self.peek() == Rune::Char('\n') {
                    self.bump();
                } else {
                    self.pos.break_line();
                }
                true
            }
            _ => false,
        }
    }

    /// Consumes blank lines and the indentation of the next line if that line
    /// starts with a tab. Otherwise nothing is consumed.
    fn indented_line(&mut self) -> bool {
        let mark = self.mark();
        loop {
            let tab = self.peek() == Rune::Char('\t');
            self.skip_inline_space();
            match self.peek() {
                Rune::Char('\n' | '\r') => {
                    self.skip_newline();
                }
                Rune::Eof => break,
                _ if tab => return true,
                _ => break,
            }
        }
        self.reset(mark);
        false
    }

    /// Folds a line break followed by indentation.
    fn continuation(&mut self) -> bool {
        let mark = self.mark();
        if self.skip_newline() && self.indented_line() {
            return true;
        }
        self.reset(mark);
        false
    }

    /// Skips inline space and a line continuation inside a replacement.
    fn fold(&mut self) -> bool {
        self.skip_inline_space();
        match self.peek() {
            Rune::Char('\n' | '\r') => self.continuation(),
            _ => true,
        }
    }

    // --- error recovery

    fn skip_line(&mut self) {
        loop {
            match self.peek() {
                Rune::Eof => return,
                Rune::Char('\n' | '\r') => {
                    self.skip_newline();
                    return;
                }
                _ => self.bump(),
            }
        }
    }

    /// Skips the rest of the current line and all following indented or blank lines.
    fn skip_message(&mut self) {
        self.skip_line();
        while let Rune::Char(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.skip_line();
        }
    }

    fn recover(&mut self) {
        self.stack.truncate(1);
        self.skip_message();
    }

    fn fatal(&mut self, msg: &str, pos: Position) {
        log::debug!("{}: scan aborted: {}", pos, msg);
        self.error(msg, pos);
        self.stack = vec![State::Done];
    }

    // --- primitives

    #[inline]
    fn emit(&mut self, kind: TokenKind, text: impl Into<String>, pos: Position) {
        self.pending.push_back(Token::new(kind, text, pos));
    }

    #[inline]
    fn error(&mut self, msg: impl Into<String>, pos: Position) {
        self.emit(TokenKind::Invalid, msg, pos);
    }

    fn set_stage(&mut self, stage: Stage) {
        if let Some(State::Replacement(current)) = self.stack.last_mut() {
            *current = stage;
        }
    }

    fn set_produced(&mut self) {
        if let Some(State::Body { produced, .. }) = self.stack.last_mut() {
            *produced = true;
        }
    }

    fn nesting(&self) -> usize {
        self.stack.iter().filter(|state| matches!(state, State::Replacement(_))).count()
    }

    #[inline]
    fn starts_with(&self, s: &str) -> bool {
        self.src[self.at..].starts_with(s.as_bytes())
    }

    #[inline]
    fn peek(&self) -> Rune {
        decode(self.src, self.at).0
    }

    fn bump(&mut self) {
        match decode(self.src, self.at) {
            (Rune::Char(ch), width) => {
                self.at += width;
                self.pos.advance(ch);
            }
            (Rune::Illegal, width) => {
                self.at += width;
                self.pos.offset += width as isize;
                self.pos.column += 1;
            }
            (Rune::Eof, _) => {}
        }
    }

    /// Returns the position of the next rune.
    fn next_pos(&self) -> Position {
        let mut pos = self.pos.clone();
        match self.peek() {
            Rune::Char(ch) => pos.advance(ch),
            _ => {
                pos.offset += 1;
                pos.column += 1;
            }
        }
        pos
    }

    #[inline]
    fn mark(&self) -> Mark {
        Mark {
            at: self.at,
            pos: self.pos.clone(),
        }
    }

    #[inline]
    fn reset(&mut self, mark: Mark) {
        self.at = mark.at;
        self.pos = mark.pos;
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            match self.stack.last().cloned() {
                None | Some(State::Done) => return None,
                Some(State::Root) => self.scan_root(),
                Some(State::Body { nested, produced }) => self.scan_body(nested, produced),
                Some(State::Replacement(stage)) => self.scan_replacement(stage),
            }
        }
    }
}

// ---

#[derive(Debug, Clone)]
enum State {
    Root,
    Body { nested: bool, produced: bool },
    Replacement(Stage),
    Done,
}

#[derive(Debug, Clone)]
enum Stage {
    Key(Position),
    Options,
    OptionBody,
}

struct Mark {
    at: usize,
    pos: Position,
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rune {
    Char(char),
    Illegal,
    Eof,
}

impl Rune {
    fn illegal(self) -> Option<&'static str> {
        match self {
            Self::Illegal => Some("invalid UTF-8 encoding"),
            Self::Char('\0') => Some("illegal character NUL"),
            Self::Char(BOM) => Some("illegal byte order mark"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{:?}", ch),
            Self::Illegal => f.write_str("invalid UTF-8"),
            Self::Eof => f.write_str("end of file"),
        }
    }
}

fn decode(src: &[u8], at: usize) -> (Rune, usize) {
    let Some(&lead) = src.get(at) else {
        return (Rune::Eof, 0);
    };
    if lead < 0x80 {
        return (Rune::Char(lead as char), 1);
    }

    let width = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return (Rune::Illegal, 1),
    };

    match src
        .get(at..at + width)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|s| s.chars().next())
    {
        Some(ch) => (Rune::Char(ch), width),
        None => (Rune::Illegal, 1),
    }
}
