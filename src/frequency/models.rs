//! Data models for the frequency-ranked "known words" list

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Default number of top-ranked words treated as common
pub const DEFAULT_TOP_N: usize = 5000;

/// One row of the frequency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub rank: u32,
    pub word: String,
    pub count: u64,
}

/// Frequency list ordered by rank, starting at 1.
///
/// Loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Build a table from rows already sorted by strictly increasing rank.
    ///
    /// Returns the offending row index when ranks are not strictly
    /// increasing or do not start at 1.
    pub fn from_rows(rows: Vec<FrequencyRow>) -> Result<Self, usize> {
        let mut prev: Option<u32> = None;
        for (idx, row) in rows.iter().enumerate() {
            let in_order = match prev {
                None => row.rank == 1,
                Some(prev) => row.rank > prev,
            };
            if !in_order {
                return Err(idx);
            }
            prev = Some(row.rank);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `word` is among the first `limit` rows, either verbatim or
    /// lowercased.
    ///
    /// The fallback only goes one way: a capitalized table entry never
    /// matches a lowercase word.
    pub fn is_common(&self, word: &str, limit: usize) -> bool {
        let lower = word.to_lowercase();
        self.rows
            .iter()
            .take(limit)
            .any(|row| row.word == word || row.word == lower)
    }

    /// Snapshot of the first `limit` words for repeated lookups.
    pub fn common_words(&self, limit: usize) -> CommonWords {
        CommonWords {
            words: self.rows.iter().take(limit).map(|row| row.word.clone()).collect(),
        }
    }
}

/// Set of common words with the same case policy as
/// [`FrequencyTable::is_common`].
#[derive(Debug, Clone, Default)]
pub struct CommonWords {
    words: HashSet<String>,
}

impl CommonWords {
    pub fn is_common(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
