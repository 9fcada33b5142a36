//! Anki text import format.

use std::path::Path;

use super::models::ResolvedEntry;
use crate::error::Result;
use crate::storage::write_atomic;

/// Render entries as Anki import lines joined by `\n`.
///
/// Entries without a definition, then entries with an empty word, are
/// dropped first, so running this on an already-clean list changes nothing.
pub fn format_entries(entries: &[ResolvedEntry]) -> String {
    entries
        .iter()
        .filter(|entry| entry.definition.is_some())
        .filter(|entry| !entry.word.is_empty())
        .filter_map(ResolvedEntry::to_card_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a formatted deck to `path`.
///
/// The file appears complete or not at all.
pub fn write_deck(path: &Path, deck_text: &str) -> Result<()> {
    write_atomic(path, deck_text.as_bytes())?;
    log::info!("Saved deck to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    fn entries() -> Vec<ResolvedEntry> {
        vec![
            ResolvedEntry::new("Fox", Some("a wild canine".into())),
            ResolvedEntry::new("jumps", None),
            ResolvedEntry::new("", Some("no word".into())),
            ResolvedEntry::new("tropicbird", Some("a tropical seabird".into())),
        ]
    }

    #[test]
    fn test_format_entries() {
        assert_eq!(
            format_entries(&entries()),
            "Fox; \"a wild canine\"\ntropicbird; \"a tropical seabird\""
        );
    }

    #[test]
    fn test_format_entries_is_idempotent_on_clean_list() {
        let deck = Deck::from_entries(entries());
        let first = format_entries(deck.entries());
        let second = format_entries(deck.entries());
        assert_eq!(first, second);
        assert_eq!(first, format_entries(&entries()));
    }

    #[test]
    fn test_format_entries_empty() {
        assert_eq!(format_entries(&[]), "");
        assert_eq!(format_entries(&[ResolvedEntry::new("jumps", None)]), "");
    }

    #[test]
    fn test_write_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        write_deck(&path, "Fox; \"a wild canine\"").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Fox; \"a wild canine\"");
    }
}
