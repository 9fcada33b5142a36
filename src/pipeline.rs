//! Article text to deck.
//!
//! tokenize -> dedup -> truncate -> drop common words -> resolve -> deck.
//! Every step only removes words; none reorders them.

use std::collections::HashSet;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_MAX_WORDS};
use crate::deck::{Deck, ResolvedEntry};
use crate::dictionary::DefinitionResolver;
use crate::frequency::{CommonWords, FrequencyTable, DEFAULT_TOP_N};
use crate::text::{Token, Tokenizer};

/// Remove repeated tokens, keeping the first occurrence of each.
pub fn dedup(tokens: Vec<Token>) -> Vec<Token> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Keep at most `max_words` tokens from the front.
pub fn truncate(mut tokens: Vec<Token>, max_words: usize) -> Vec<Token> {
    tokens.truncate(max_words);
    tokens
}

/// Drop empty tokens and tokens that are common words.
pub fn filter_uncommon(tokens: Vec<Token>, common: &CommonWords) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.is_empty() && !common.is_common(token))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub top_n: usize,
    pub max_words: usize,
    pub concurrency: usize,
    pub timeout: Option<Duration>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_words: DEFAULT_MAX_WORDS,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: None,
        }
    }
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            top_n: config.top_n,
            max_words: config.max_words,
            concurrency: config.concurrency,
            timeout: config.timeout(),
        }
    }
}

/// Builds decks from article text.
///
/// The frequency table is snapshotted into a common-word set at
/// construction; nothing is mutated while a deck is being built.
pub struct Pipeline {
    tokenizer: Tokenizer,
    common: CommonWords,
    resolver: DefinitionResolver,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(
        table: &FrequencyTable,
        resolver: DefinitionResolver,
        options: PipelineOptions,
    ) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            common: table.common_words(options.top_n),
            resolver,
            options,
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Words that would be looked up for `text`, in text order.
    pub fn candidates(&self, text: &str) -> Vec<Token> {
        let tokens = self.tokenizer.tokenize(text);
        let token_count = tokens.len();
        let unique = dedup(tokens);
        let unique_count = unique.len();
        let capped = truncate(unique, self.options.max_words);
        let candidates = filter_uncommon(capped, &self.common);

        log::info!(
            "{} tokens, {} unique, {} candidates after frequency filter",
            token_count,
            unique_count,
            candidates.len()
        );
        candidates
    }

    /// Look up every word with at most `concurrency` lookups in flight.
    ///
    /// Results come back in input order. Once `cancel` fires or the
    /// configured timeout passes, unfinished words get no definition.
    pub async fn resolve_entries(
        &self,
        words: Vec<Token>,
        cancel: &CancellationToken,
    ) -> Vec<ResolvedEntry> {
        let deadline = self.options.timeout.map(|timeout| Instant::now() + timeout);
        let resolver = &self.resolver;

        let entries: Vec<ResolvedEntry> = stream::iter(words)
            .map(|word| async move {
                let definition = tokio::select! {
                    biased;
                    _ = stopped(cancel, deadline) => {
                        log::debug!("Skipping '{}': lookups stopped", word);
                        None
                    }
                    definition = resolver.resolve(&word) => definition,
                };
                ResolvedEntry::new(word, definition)
            })
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await;

        let timed_out = deadline.is_some_and(|at| Instant::now() >= at);
        if cancel.is_cancelled() || timed_out {
            log::warn!("Dictionary lookups stopped early; remaining words were skipped");
        }
        entries
    }

    pub async fn build_deck(&self, text: &str) -> Deck {
        self.build_deck_with_cancel(text, &CancellationToken::new()).await
    }

    pub async fn build_deck_with_cancel(&self, text: &str, cancel: &CancellationToken) -> Deck {
        let candidates = self.candidates(text);
        let entries = self.resolve_entries(candidates, cancel).await;
        let deck = Deck::from_entries(entries);
        log::info!("Deck has {} cards", deck.len());
        deck
    }
}

/// Resolves once lookups should stop.
async fn stopped(cancel: &CancellationToken, deadline: Option<Instant>) {
    match deadline {
        Some(at) => {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep_until(at) => {}
            }
        }
        None => cancel.cancelled().await,
    }
}
