// std imports
use std::fmt;

// third-party imports
use serde::Serialize;
use thiserror::Error;

// ---

/// Resolves locale identifiers into handles carrying locale metadata.
pub trait LocaleLookup {
    fn resolve(&self, id: &str) -> Result<LocaleHandle, LocaleError>;
}

impl<T: LocaleLookup + ?Sized> LocaleLookup for &T {
    #[inline]
    fn resolve(&self, id: &str) -> Result<LocaleHandle, LocaleError> {
        (**self).resolve(id)
    }
}

// ---

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot resolve locale {id:?}: {reason}")]
pub struct LocaleError {
    pub id: String,
    pub reason: String,
}

impl LocaleError {
    fn new(id: &str, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

// ---

/// Resolved locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocaleHandle {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl LocaleHandle {
    /// Returns the normalized language tag.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LocaleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        for subtag in self.script.iter().chain(&self.region).chain(&self.variants) {
            write!(f, "-{}", subtag)?;
        }
        Ok(())
    }
}

// ---

/// Resolves syntactically valid BCP 47 language tags without consulting locale data.
///
/// Accepts `language[-script][-region][-variant]*` with `-` or `_` as separator
/// and normalizes subtag case.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagLocales;

impl LocaleLookup for TagLocales {
    fn resolve(&self, id: &str) -> Result<LocaleHandle, LocaleError> {
        let mut subtags = id.split(['-', '_']).peekable();

        let language = match subtags.next() {
            Some(s) if (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic()) => {
                s.to_ascii_lowercase()
            }
            _ => return Err(LocaleError::new(id, "invalid language subtag")),
        };

        let script = subtags
            .next_if(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()))
            .map(titlecase);

        let region = subtags
            .next_if(|s| {
                (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                    || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
            })
            .map(|s| s.to_ascii_uppercase());

        let variants = subtags
            .map(|s| {
                let valid = s.chars().all(|c| c.is_ascii_alphanumeric())
                    && ((5..=8).contains(&s.len())
                        || (s.len() == 4 && s.starts_with(|c: char| c.is_ascii_digit())));
                if valid {
                    Ok(s.to_ascii_lowercase())
                } else {
                    Err(LocaleError::new(id, format!("invalid subtag {:?}", s)))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LocaleHandle {
            language,
            script,
            region,
            variants,
        })
    }
}

fn titlecase(s: &str) -> String {
    let mut result = s.to_ascii_lowercase();
    if let Some(first) = result.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    result
}

#[cfg(test)]
mod tests;
