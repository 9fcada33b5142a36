//! Dictionary lookups for candidate words
//!
//! This module provides:
//! - Typed dictionary entries and per-word lookup errors
//! - The `DefinitionSource` seam and its Wiktionary implementation
//! - The resolver with its lowercase fallback

mod models;
mod resolver;
mod source;
#[cfg(test)]
pub(crate) mod test_support;
mod wiktionary;

pub use models::{extract_definition, DefinitionGroup, DictionaryEntry, LookupError};
pub use resolver::DefinitionResolver;
pub use source::DefinitionSource;
pub use wiktionary::{parse_definition_response, WiktionaryClient, DEFAULT_WIKTIONARY_URL};
