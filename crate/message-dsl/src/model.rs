// std imports
use std::{collections::BTreeMap, fmt};

// third-party imports
use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumString};

// ---

/// A message: authored text interleaved with typed replacements.
///
/// Each replacement's `text_pos` is the number of `text` segments preceding
/// it, see [`Message::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub section: String,
    pub key: String,
    pub text: Vec<String>,
    pub replacements: Vec<Replacement>,
}

impl Message {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    /// Returns true if the message has no replacements.
    #[inline]
    pub fn is_plain_text(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Returns all text segments joined together.
    pub fn plain_text(&self) -> String {
        self.text.concat()
    }

    /// Appends text, extending the last segment unless a replacement follows it.
    pub fn push_text(&mut self, text: &str) {
        let trailing = self.has_trailing_replacement();
        match self.text.last_mut() {
            Some(last) if !trailing => last.push_str(text),
            _ => self.text.push(text.to_owned()),
        }
    }

    /// Appends a replacement positioned after the current text segments.
    pub fn push_replacement(&mut self, key: impl Into<String>, kind: ReplacementKind, details: ReplacementDetails) {
        self.replacements.push(Replacement {
            key: key.into(),
            text_pos: self.text.len(),
            kind,
            details,
        });
    }

    /// Trims trailing whitespace of the last text segment if nothing follows it.
    pub fn trim_trailing(&mut self) {
        if self.has_trailing_replacement() {
            return;
        }
        if let Some(last) = self.text.last_mut() {
            let len = last.trim_end().len();
            last.truncate(len);
            if last.is_empty() {
                self.text.pop();
            }
        }
    }

    /// Renders the message, resolving each replacement with `resolve`.
    pub fn render<F, S>(&self, mut resolve: F) -> String
    where
        F: FnMut(&Replacement) -> S,
        S: AsRef<str>,
    {
        let mut result = String::new();
        let mut pos = 0;
        for replacement in &self.replacements {
            while pos < replacement.text_pos && pos < self.text.len() {
                result.push_str(&self.text[pos]);
                pos += 1;
            }
            result.push_str(resolve(replacement).as_ref());
        }
        for text in &self.text[pos..] {
            result.push_str(text);
        }
        result
    }

    fn has_trailing_replacement(&self) -> bool {
        self.replacements
            .last()
            .is_some_and(|r| r.text_pos >= self.text.len())
    }
}

/// Formats the message body in canonical source form.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|r| r.to_string()))
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub key: String,
    pub text_pos: usize,
    pub kind: ReplacementKind,
    pub details: ReplacementDetails,
}

/// Formats the replacement as a placeholder, e.g. `${n:plural.one{item}.other{items}}`.
impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}", self.key)?;
        if self.kind != ReplacementKind::String {
            write!(f, ":{}", self.kind)?;
        }

        match &self.details {
            ReplacementDetails::Empty => {}
            ReplacementDetails::Money { currency } => {
                write!(f, ".currency{{{}}}", currency)?;
            }
            ReplacementDetails::Plural {
                plural_type,
                variants,
                custom,
            } => {
                if *plural_type == PluralType::Ordinal {
                    write!(f, ".{}", plural_type)?;
                }
                for (value, message) in custom {
                    write!(f, ".[{}]{{{}}}", value, message)?;
                }
                for (category, message) in variants {
                    write!(f, ".{}{{{}}}", category, message)?;
                }
            }
            ReplacementDetails::Select { cases, fallback } => {
                for (case, message) in cases {
                    write!(f, ".[{}]{{{}}}", case, message)?;
                }
                if !fallback.is_empty() {
                    write!(f, ".default{{{}}}", fallback)?;
                }
            }
        }

        f.write_str("}")
    }
}

// ---

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReplacementKind {
    String,
    Number,
    Percent,
    Money,
    Plural,
    Select,
}

// ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplacementDetails {
    /// No details, used by string, number and percent replacements.
    #[default]
    Empty,
    Money {
        currency: String,
    },
    Plural {
        plural_type: PluralType,
        variants: BTreeMap<PluralCategory, Message>,
        custom: BTreeMap<i64, Message>,
    },
    Select {
        cases: BTreeMap<String, Message>,
        fallback: String,
    },
}

// ---

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PluralType {
    #[default]
    Cardinal,
    Ordinal,
}

// ---

/// CLDR plural category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

#[cfg(test)]
mod tests;
