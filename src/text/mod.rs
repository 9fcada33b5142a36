//! Text processing: article text to candidate words.

mod tokenizer;

pub use tokenizer::{Token, Tokenizer};
