//! Data models for the vocabulary deck

use serde::Serialize;

use super::format::format_entries;
use crate::text::Token;

/// A word paired with the definition found for it, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub word: Token,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl ResolvedEntry {
    pub fn new(word: impl Into<Token>, definition: Option<String>) -> Self {
        Self {
            word: word.into(),
            definition,
        }
    }

    /// Usable as a card: non-empty word and a definition.
    pub fn is_card(&self) -> bool {
        !self.word.is_empty() && self.definition.is_some()
    }

    /// Render as one Anki import line: `word; "definition"`.
    ///
    /// `None` for entries without a definition.
    pub fn to_card_line(&self) -> Option<String> {
        self.definition
            .as_ref()
            .map(|definition| format!("{}; \"{}\"", self.word, definition))
    }
}

/// Ordered cards, each with a non-empty word and a definition.
///
/// Order is the order the words first appeared in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    entries: Vec<ResolvedEntry>,
}

impl Deck {
    /// Keep only usable entries, preserving their order.
    pub fn from_entries(entries: impl IntoIterator<Item = ResolvedEntry>) -> Self {
        Self {
            entries: entries.into_iter().filter(ResolvedEntry::is_card).collect(),
        }
    }

    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole deck in Anki import format
    pub fn as_string(&self) -> String {
        format_entries(&self.entries)
    }
}

impl IntoIterator for Deck {
    type Item = ResolvedEntry;
    type IntoIter = std::vec::IntoIter<ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
