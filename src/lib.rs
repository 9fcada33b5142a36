//! Turn the text of a web article into an Anki vocabulary deck.
//!
//! Words are pulled out of the article, common words are filtered out with
//! a frequency list, and the rest are looked up on Wiktionary.

pub mod config;
pub mod deck;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod page;
pub mod pipeline;
pub mod storage;
pub mod text;

#[cfg(test)]
pub(crate) mod test_server;

pub use config::Config;
pub use deck::{format_entries, Deck, ResolvedEntry};
pub use dictionary::{DefinitionResolver, DefinitionSource, LookupError, WiktionaryClient};
pub use error::{Error, Result};
pub use frequency::{load_frequency_table, FrequencyTable};
pub use pipeline::{Pipeline, PipelineOptions};
pub use text::{Token, Tokenizer};
