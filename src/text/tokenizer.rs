//! Splits article text into candidate words.

use regex::Regex;

/// A single cleaned word. May be empty straight out of the tokenizer.
pub type Token = String;

/// Strips punctuation and splits on whitespace.
///
/// Patterns are compiled once in [`Tokenizer::new`]; a tokenizer is
/// immutable afterwards and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    non_word: Regex,
    whitespace: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            non_word: Regex::new(r"[^\w\s]").expect("valid punctuation pattern"),
            whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
        }
    }

    /// Remove every character that is neither a word character nor
    /// whitespace.
    pub fn remove_punctuation(&self, text: &str) -> String {
        self.non_word.replace_all(text, "").into_owned()
    }

    /// Split on runs of whitespace. Leading and trailing whitespace yield
    /// empty tokens, which later stages drop.
    pub fn split_by_whitespace(&self, text: &str) -> Vec<Token> {
        self.whitespace.split(text).map(str::to_string).collect()
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.split_by_whitespace(&self.remove_punctuation(text))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
