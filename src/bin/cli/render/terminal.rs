use wiki2anki::ResolvedEntry;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// One card per line; word in bold when colors are on
pub fn render_card(entry: &ResolvedEntry, use_color: bool) -> Option<String> {
    let line = entry.to_card_line()?;
    if !use_color {
        return Some(line);
    }
    let definition = entry.definition.as_deref().unwrap_or_default();
    Some(format!(
        "{}{}{}; {}\"{}\"{}",
        Color::BOLD,
        entry.word,
        Color::RESET,
        Color::DIM,
        definition,
        Color::RESET
    ))
}

pub fn warning(message: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", Color::YELLOW, message, Color::RESET)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_card_plain_matches_deck_format() {
        let entry = ResolvedEntry::new("Fox", Some("a wild canine".into()));
        assert_eq!(render_card(&entry, false).as_deref(), Some("Fox; \"a wild canine\""));
    }

    #[test]
    fn test_render_card_without_definition() {
        assert_eq!(render_card(&ResolvedEntry::new("jumps", None), true), None);
    }
}
