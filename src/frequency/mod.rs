//! Frequency-ranked reference list of common words
//!
//! This module provides:
//! - The ranked table and its common/uncommon classification
//! - CSV loading and saving
//! - A scraper for the Wiktionary frequency-list pages

mod models;
mod scrape;
mod storage;

pub use models::{CommonWords, FrequencyRow, FrequencyTable, DEFAULT_TOP_N};
pub use scrape::{fetch_frequency_rows, parse_frequency_page, DEFAULT_FREQUENCY_URL};
pub use storage::{frequency_csv, load_frequency_table, parse_frequency_csv, save_frequency_table};
