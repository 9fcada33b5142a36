//! Vocabulary decks
//!
//! Resolved word/definition pairs, their Anki text rendering, and writing
//! the result to disk.

mod format;
mod models;

pub use format::{format_entries, write_deck};
pub use models::{Deck, ResolvedEntry};
