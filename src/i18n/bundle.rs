//! Message bundle wire format and the post-processed in-memory form.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest accepted `$N` placeholder position.
pub const MAX_PLACEHOLDER_POSITION: usize = 99;

/// A bundle exactly as stored in `messages.json`.
pub type RawBundle = HashMap<String, RawMessage>;

/// One message entry of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Display template.
    pub message: String,

    /// Named placeholders, each bound to a 1-based argument position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<BTreeMap<String, PlaceholderDescriptor>>,

    /// Translator note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Structural descriptor of a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderDescriptor {
    /// Positional reference of the form `$N`.
    pub content: String,

    /// Sample value shown to translators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl PlaceholderDescriptor {
    /// Decode the 0-based argument position from `$N`.
    ///
    /// Returns `None` unless `content` is `$` followed by an integer in
    /// `1..=MAX_PLACEHOLDER_POSITION`.
    pub fn position(&self) -> Option<usize> {
        let digits = self.content.trim().strip_prefix('$')?;
        match digits.parse::<usize>() {
            Ok(n) if (1..=MAX_PLACEHOLDER_POSITION).contains(&n) => Some(n - 1),
            _ => None,
        }
    }

    /// Like [`PlaceholderDescriptor::position`], reporting which message and
    /// placeholder failed to decode.
    pub fn decode(&self, key: &str, name: &str) -> Result<usize> {
        self.position().ok_or_else(|| Error::Placeholder {
            key: key.to_string(),
            name: name.to_string(),
            content: self.content.clone(),
        })
    }
}

/// A message ready for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMessage {
    /// Display template.
    pub message: String,

    /// Declared placeholders by name.
    pub placeholders: BTreeMap<String, PlaceholderDescriptor>,

    /// Placeholder name at each argument position, built once at load time.
    pub placeholder_list: Vec<Option<String>>,

    /// Translator note.
    pub description: Option<String>,
}

impl LocaleMessage {
    /// Build a message from its wire form, decoding placeholder positions.
    ///
    /// Descriptors that do not decode are skipped and logged; they never fail
    /// the whole bundle.
    pub fn from_raw(key: &str, raw: RawMessage) -> Self {
        let placeholders = raw.placeholders.unwrap_or_default();
        let mut placeholder_list: Vec<Option<String>> = Vec::new();

        for (name, descriptor) in &placeholders {
            let position = match descriptor.decode(key, name) {
                Ok(position) => position,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping placeholder");
                    continue;
                },
            };

            if placeholder_list.len() <= position {
                placeholder_list.resize(position + 1, None);
            }
            match &placeholder_list[position] {
                Some(existing) => tracing::warn!(
                    key = key,
                    position = position + 1,
                    kept = %existing,
                    ignored = %name,
                    "Duplicate placeholder position"
                ),
                None => placeholder_list[position] = Some(name.clone()),
            }
        }

        Self { message: raw.message, placeholders, placeholder_list, description: raw.description }
    }

    /// Whether the message declares any placeholders.
    pub fn has_placeholders(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Name bound to the argument at `index`, if declared.
    pub fn placeholder_at(&self, index: usize) -> Option<&str> {
        self.placeholder_list.get(index).and_then(Option::as_deref)
    }
}

/// All messages of one locale, keyed by message key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMessages {
    messages: HashMap<String, LocaleMessage>,
}

impl LocaleMessages {
    /// Look up a message.
    pub fn get(&self, key: &str) -> Option<&LocaleMessage> {
        self.messages.get(key)
    }

    /// Whether the bundle contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over `(key, message)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleMessage)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<RawBundle> for LocaleMessages {
    fn from(raw: RawBundle) -> Self {
        let messages = raw
            .into_iter()
            .map(|(key, message)| {
                let message = LocaleMessage::from_raw(&key, message);
                (key, message)
            })
            .collect();
        Self { messages }
    }
}

/// The target and fallback bundles from one load.
///
/// Either slot is `None` when its fetch failed.
#[derive(Debug, Clone, Default)]
pub struct FetchedLocaleMessages {
    /// Bundle for the active locale.
    pub target: Option<LocaleMessages>,
    /// Bundle for the default locale.
    pub fallback: Option<LocaleMessages>,
}

impl FetchedLocaleMessages {
    /// Find `key` in the target bundle, then in the fallback bundle.
    pub fn lookup(&self, key: &str) -> Option<&LocaleMessage> {
        self.target
            .as_ref()
            .and_then(|messages| messages.get(key))
            .or_else(|| self.fallback.as_ref().and_then(|messages| messages.get(key)))
    }
}
