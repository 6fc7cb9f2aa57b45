// std imports
use std::collections::{HashMap, hash_map::Entry};

// local imports
use crate::model::Message;

// ---

/// Receives advisory warnings.
pub trait WarningSink {
    fn warn(&mut self, message: String);
}

impl WarningSink for Vec<String> {
    #[inline]
    fn warn(&mut self, message: String) {
        self.push(message);
    }
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    #[inline]
    fn warn(&mut self, message: String) {
        log::warn!("{}", message);
    }
}

// ---

/// Reports duplicate `(section, key)` pairs, once per pair.
pub fn validate<'a, I, S>(messages: I, sink: &mut S)
where
    I: IntoIterator<Item = &'a Message>,
    S: WarningSink + ?Sized,
{
    let mut sections: HashMap<&str, HashMap<&str, bool>> = HashMap::new();

    for message in messages {
        let keys = sections.entry(&message.section).or_default();
        match keys.entry(&message.key) {
            Entry::Vacant(entry) => {
                entry.insert(false);
            }
            Entry::Occupied(mut entry) => {
                if !entry.get() {
                    entry.insert(true);
                    sink.warn(duplicate_warning(message));
                }
            }
        }
    }
}

fn duplicate_warning(message: &Message) -> String {
    if message.section.is_empty() {
        format!("duplicate message key {:?}", message.key)
    } else {
        format!(
            "duplicate message key {:?} for section {:?}",
            message.key, message.section
        )
    }
}
