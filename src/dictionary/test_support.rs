//! In-memory definition source for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::models::{DefinitionGroup, DictionaryEntry, LookupError};
use super::source::DefinitionSource;

/// Answers from a fixed map and records every word it was asked for.
#[derive(Default)]
pub struct MemorySource {
    entries: HashMap<String, Vec<DictionaryEntry>>,
    failures: HashSet<String>,
    delays: HashMap<String, Duration>,
    queries: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(self, word: &str, definition: &str) -> Self {
        let entry = DictionaryEntry {
            definitions: vec![DefinitionGroup::new("Noun", [definition.to_string()])],
        };
        self.with_entries(word, vec![entry])
    }

    pub fn with_entries(mut self, word: &str, entries: Vec<DictionaryEntry>) -> Self {
        self.entries.insert(word.to_string(), entries);
        self
    }

    /// Lookups for `word` fail with a server error.
    pub fn with_failure(mut self, word: &str) -> Self {
        self.failures.insert(word.to_string());
        self
    }

    /// Lookups for `word` take `delay` before answering.
    pub fn with_delay(mut self, word: &str, delay: Duration) -> Self {
        self.delays.insert(word.to_string(), delay);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionSource for MemorySource {
    async fn entries(
        &self,
        word: &str,
        _language: &str,
    ) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.queries.lock().unwrap().push(word.to_string());

        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }
        if self.failures.contains(word) {
            return Err(LookupError::Status { status: 503 });
        }
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
