pub mod build;
pub mod define;
pub mod frequency;
pub mod words;
