// third-party imports
use message_dsl::Message;
use serde::Serialize;

// local imports
use crate::locale::LocaleHandle;

// ---

/// Compiled messages for a single locale, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub locale: LocaleHandle,
    pub messages: Vec<Message>,
}

impl Catalog {
    pub fn new(locale: LocaleHandle, messages: Vec<Message>) -> Self {
        Self { locale, messages }
    }

    /// Returns the first message defined for `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.section == section && m.key == key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
