//! Word to definition, with a single lowercase retry.

use std::sync::Arc;

use super::models::{extract_definition, LookupError};
use super::source::DefinitionSource;

/// Resolves words to a single definition string.
///
/// Holds only a shared handle to the source and the language, so clones
/// can run concurrently.
#[derive(Clone)]
pub struct DefinitionResolver {
    source: Arc<dyn DefinitionSource>,
    language: String,
}

impl DefinitionResolver {
    pub fn new(source: Arc<dyn DefinitionSource>, language: impl Into<String>) -> Self {
        Self {
            source,
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// One lookup for exactly `word`, no fallback.
    pub async fn lookup(&self, word: &str) -> Result<String, LookupError> {
        let entries = self.source.entries(word, &self.language).await?;
        extract_definition(word, &self.language, &entries)
    }

    /// Definition for `word`, or `None`.
    ///
    /// A word containing uppercase letters gets exactly one more attempt in
    /// lowercase. Every lookup failure is logged and absorbed here.
    pub async fn resolve(&self, word: &str) -> Option<String> {
        match self.lookup(word).await {
            Ok(definition) => return Some(definition),
            Err(e) => self.log_miss(&e),
        }

        if !word.chars().any(char::is_uppercase) {
            return None;
        }

        let lower = word.to_lowercase();
        match self.lookup(&lower).await {
            Ok(definition) => Some(definition),
            Err(e) => {
                self.log_miss(&e);
                None
            }
        }
    }

    fn log_miss(&self, err: &LookupError) {
        match err {
            LookupError::NoEntry { .. } | LookupError::MalformedEntry { .. } => {
                log::info!("{}", err)
            }
            LookupError::Http(_) | LookupError::Status { .. } => {
                log::warn!("{} lookup failed: {}", self.source.name(), err)
            }
        }
    }
}
