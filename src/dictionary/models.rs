//! Typed shape of dictionary lookups

use serde::Serialize;
use thiserror::Error;

/// One dictionary entry for a word in a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub definitions: Vec<DefinitionGroup>,
}

/// Senses of one part of speech.
///
/// `text[0]` is the part-of-speech label; the senses follow from `text[1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DefinitionGroup {
    pub part_of_speech: String,
    pub text: Vec<String>,
}

impl DefinitionGroup {
    pub fn new(
        part_of_speech: impl Into<String>,
        senses: impl IntoIterator<Item = String>,
    ) -> Self {
        let part_of_speech = part_of_speech.into();
        let mut text = vec![part_of_speech.clone()];
        text.extend(senses);
        Self { part_of_speech, text }
    }
}

/// Why a single word got no definition.
///
/// Never fatal: the resolver absorbs every variant.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No {language} definition found for: '{word}'")]
    NoEntry { word: String, language: String },

    #[error("No definition found for: '{word}' ({reason})")]
    MalformedEntry { word: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {status}")]
    Status { status: u16 },
}

/// Pick the definition out of a lookup result: first entry, first
/// definition group, second text element.
pub fn extract_definition(
    word: &str,
    language: &str,
    entries: &[DictionaryEntry],
) -> Result<String, LookupError> {
    let malformed = |reason: &str| LookupError::MalformedEntry {
        word: word.to_string(),
        reason: reason.to_string(),
    };

    let Some(entry) = entries.first() else {
        return Err(LookupError::NoEntry {
            word: word.to_string(),
            language: language.to_string(),
        });
    };
    let group = entry.definitions.first().ok_or_else(|| malformed("entry has no definitions"))?;
    let text = group.text.get(1).ok_or_else(|| malformed("definition has no senses"))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(malformed("empty definition"));
    }
    Ok(text.to_string())
}
