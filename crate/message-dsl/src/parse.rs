// std imports
use std::sync::Arc;

// local imports
use crate::{
    error::ErrorList,
    lexer::Lexer,
    model::{Message, Replacement, ReplacementKind},
    position::Position,
    token::{Token, TokenKind},
};

mod details;

// ---

/// Result of parsing a single file.
///
/// Messages are returned even if errors were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub messages: Vec<Message>,
    pub errors: ErrorList,
}

impl Parsed {
    pub fn into_result(self) -> Result<Vec<Message>, ErrorList> {
        if self.errors.is_empty() {
            Ok(self.messages)
        } else {
            Err(self.errors)
        }
    }
}

/// Parses the message file `src` named `file`.
pub fn parse(file: impl Into<Arc<str>>, src: &[u8]) -> Parsed {
    Parser::new(Lexer::new(file, src)).parse()
}

// ---

/// Builds messages from a token stream, usually a [`Lexer`].
pub struct Parser<I> {
    tokens: I,
    peeked: Option<Token>,
    last_pos: Position,
    errors: ErrorList,
    recovering: bool,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            peeked: None,
            last_pos: Position::default(),
            errors: ErrorList::new(),
            recovering: false,
        }
    }

    pub fn parse(mut self) -> Parsed {
        let mut section = String::new();
        let mut messages = Vec::new();

        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::SectionHeader => {
                    self.recovering = false;
                    section = token.text;
                }
                TokenKind::MessageKey => {
                    self.recovering = false;
                    log::trace!("{}: message {:?}", token.pos, token.text);
                    let mut message = Message::new(section.clone(), token.text);
                    self.parse_body(&mut message);
                    messages.push(message);
                }
                _ => {
                    if !self.recovering {
                        self.error(format!("unexpected token {}", token), token.pos);
                    }
                }
            }
        }

        Parsed {
            messages,
            errors: self.errors,
        }
    }

    /// Parses body fragments into `message` until a token not belonging to the body is found.
    fn parse_body(&mut self, message: &mut Message) {
        loop {
            match self.peek_kind() {
                Some(TokenKind::MessageNewline) => {
                    self.next();
                    if !message.text.is_empty() || !message.replacements.is_empty() {
                        message.push_text(" ");
                    }
                }
                Some(TokenKind::MessageText) => {
                    let Some(token) = self.next() else { break };
                    message.push_text(&token.text);
                }
                Some(TokenKind::ReplacementStart) => {
                    let Some(token) = self.next() else { break };
                    let text_pos = message.text.len();
                    if let Some(replacement) = self.parse_replacement(token, text_pos) {
                        message.replacements.push(replacement);
                    }
                }
                _ => break,
            }
        }
        message.trim_trailing();
    }

    fn parse_replacement(&mut self, start: Token, text_pos: usize) -> Option<Replacement> {
        let mut kind = Some(ReplacementKind::String);
        if self.peek_kind() == Some(TokenKind::ReplacementType) {
            if let Some(token) = self.next() {
                kind = token.text.parse().ok();
                if kind.is_none() {
                    self.error(format!("invalid replacement type: {}", token.text), token.pos);
                }
            }
        }

        let replacement = match kind {
            Some(kind) => Some(Replacement {
                details: self.parse_details(kind, &start.pos),
                key: start.text,
                text_pos,
                kind,
            }),
            None => {
                self.skip_options();
                None
            }
        };

        self.expect(TokenKind::ReplacementEnd, "'}' expected at end of replacement");
        replacement
    }

    // ---

    fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.fetch();
        }
        self.peeked.as_ref()
    }

    #[inline]
    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn next(&mut self) -> Option<Token> {
        self.peek();
        let token = self.peeked.take()?;
        self.last_pos = token.pos.clone();
        Some(token)
    }

    /// Pulls the next token, collecting invalid tokens as errors.
    fn fetch(&mut self) -> Option<Token> {
        for token in self.tokens.by_ref() {
            if token.kind != TokenKind::Invalid {
                return Some(token);
            }
            self.recovering = true;
            self.errors.add(token.text, token.pos);
        }
        None
    }

    fn expect(&mut self, kind: TokenKind, msg: &str) -> bool {
        let found = self.peek().map(|token| (token.kind, token.to_string(), token.pos.clone()));
        match found {
            Some((found, _, _)) if found == kind => {
                self.next();
                true
            }
            _ if self.recovering => false,
            Some((_, found, pos)) => {
                self.error(format!("{}, found {}", msg, found), pos);
                false
            }
            None => {
                let pos = self.last_pos.clone();
                self.error(format!("{}, found end of file", msg), pos);
                false
            }
        }
    }

    #[inline]
    fn error(&mut self, msg: impl Into<String>, pos: Position) {
        self.errors.add(msg, pos);
    }
}
