// std imports
use std::collections::{BTreeMap, HashSet, btree_map::Entry};

// local imports
use super::Parser;
use crate::{
    model::{Message, PluralCategory, PluralType, ReplacementDetails, ReplacementKind},
    position::Position,
    token::{Token, TokenKind},
};

// ---

/// A parsed `.name{body}` or `.[literal]{body}` replacement option.
struct ReplacementOption {
    name: OptionName,
    pos: Position,
    body: Message,
}

enum OptionName {
    Ident(String),
    Literal(String),
}

// ---

impl<I: Iterator<Item = Token>> Parser<I> {
    pub(super) fn parse_details(&mut self, kind: ReplacementKind, pos: &Position) -> ReplacementDetails {
        match kind {
            ReplacementKind::String | ReplacementKind::Number | ReplacementKind::Percent => {
                self.skip_options();
                ReplacementDetails::Empty
            }
            ReplacementKind::Money => self.parse_money(pos),
            ReplacementKind::Plural => self.parse_plural(pos),
            ReplacementKind::Select => self.parse_select(),
        }
    }

    /// Consumes all remaining options of a replacement, discarding them.
    pub(super) fn skip_options(&mut self) {
        while let Some(option) = self.next_option() {
            log::trace!("{}: ignoring replacement option", option.pos);
        }
    }

    fn next_option(&mut self) -> Option<ReplacementOption> {
        if self.peek_kind() != Some(TokenKind::ReplacementOptionStart) {
            return None;
        }
        let token = self.next()?;

        let literal = token
            .text
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .map(str::to_owned);
        let name = match literal {
            Some(literal) => OptionName::Literal(literal),
            None => OptionName::Ident(token.text),
        };

        let key = match &name {
            OptionName::Ident(name) | OptionName::Literal(name) => name.clone(),
        };
        let mut body = Message::new("", key);
        self.parse_body(&mut body);
        self.expect(TokenKind::ReplacementOptionEnd, "'}' expected at end of replacement option");

        Some(ReplacementOption {
            name,
            pos: token.pos,
            body,
        })
    }

    fn parse_money(&mut self, pos: &Position) -> ReplacementDetails {
        let mut currency = None;

        while let Some(option) = self.next_option() {
            match option.name {
                OptionName::Ident(name) if name.eq_ignore_ascii_case("currency") => {
                    if currency.is_some() {
                        self.error("money option .currency already defined", option.pos);
                        continue;
                    }
                    if !option.body.is_plain_text() {
                        self.error("replacements not allowed in money option .currency", option.pos);
                        currency = Some(String::new());
                        continue;
                    }
                    let value = option.body.plain_text();
                    if value.is_empty() {
                        self.error("money option .currency is empty", option.pos);
                    }
                    currency = Some(value);
                }
                OptionName::Ident(name) => {
                    self.error(format!("invalid money option: .{}", name), option.pos);
                }
                OptionName::Literal(literal) => {
                    self.error(format!("invalid money option: .[{}]", literal), option.pos);
                }
            }
        }

        if currency.is_none() {
            self.error("money option .currency required", pos.clone());
        }

        ReplacementDetails::Money {
            currency: currency.unwrap_or_default(),
        }
    }

    fn parse_plural(&mut self, pos: &Position) -> ReplacementDetails {
        let mut plural_type = None;
        let mut variants = BTreeMap::new();
        let mut custom = BTreeMap::new();

        while let Some(option) = self.next_option() {
            match option.name {
                OptionName::Ident(name) => {
                    if let Ok(t) = name.parse::<PluralType>() {
                        match plural_type {
                            Some(previous) if previous != t => self.error(
                                format!("multiple plural types defined ({} and {})", previous, t),
                                option.pos,
                            ),
                            _ => plural_type = Some(t),
                        }
                    } else if let Ok(category) = name.parse::<PluralCategory>() {
                        match variants.entry(category) {
                            Entry::Occupied(_) => {
                                self.error(format!("plural option .{} already defined", category), option.pos)
                            }
                            Entry::Vacant(entry) => {
                                entry.insert(option.body);
                            }
                        }
                    } else {
                        self.error(format!("invalid plural option: .{}", name), option.pos);
                    }
                }
                OptionName::Literal(literal) => match literal.trim().parse::<i64>() {
                    Ok(value) => match custom.entry(value) {
                        Entry::Occupied(_) => {
                            self.error(format!("custom plural option .[{}] already defined", value), option.pos)
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(option.body);
                        }
                    },
                    Err(_) => {
                        self.error(format!("invalid custom plural option: .[{}]", literal), option.pos);
                    }
                },
            }
        }

        if !variants.contains_key(&PluralCategory::Other) {
            self.error("plural option .other required", pos.clone());
        }

        ReplacementDetails::Plural {
            plural_type: plural_type.unwrap_or_default(),
            variants,
            custom,
        }
    }

    fn parse_select(&mut self) -> ReplacementDetails {
        let mut cases = BTreeMap::new();
        let mut fallback = String::new();
        let mut directives = HashSet::new();
        let mut fallback_pos = None;

        while let Some(option) = self.next_option() {
            match option.name {
                OptionName::Literal(case) => match cases.entry(case) {
                    Entry::Occupied(entry) => {
                        self.error(format!("select option .[{}] already defined", entry.key()), option.pos);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(option.body);
                    }
                },
                OptionName::Ident(name) => {
                    let lower = name.to_lowercase();
                    if !directives.insert(lower.clone()) {
                        self.error(format!("select option .{} already defined", name), option.pos);
                        continue;
                    }
                    if !option.body.is_plain_text() {
                        self.error(format!("replacements not allowed in select option .{}", name), option.pos);
                        continue;
                    }
                    let value = option.body.plain_text();
                    if lower == "default" {
                        fallback = value;
                        fallback_pos = Some(option.pos);
                    }
                }
            }
        }

        if !fallback.is_empty() && !cases.contains_key(&fallback) {
            let pos = fallback_pos.unwrap_or_else(|| self.last_pos.clone());
            self.error(format!("default value {:?} not found in select options", fallback), pos);
        }

        ReplacementDetails::Select { cases, fallback }
    }
}
