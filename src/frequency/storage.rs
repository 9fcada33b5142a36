//! Reading and writing the frequency list as CSV.
//!
//! File layout (header included):
//! ```text
//! rank,word,count
//! 1,the,56271872
//! 2,of,33950064
//! ```

use std::path::Path;

use super::models::{FrequencyRow, FrequencyTable};
use crate::error::{Error, Result};
use crate::storage::write_atomic;

const SOURCE_NAME: &str = "frequency list";

/// Parse a frequency list from CSV text.
///
/// Fails closed: one malformed row makes the whole table unavailable.
pub fn parse_frequency_csv(content: &str) -> Result<FrequencyTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (row_idx, result) in reader.deserialize::<FrequencyRow>().enumerate() {
        let row = result.map_err(|e| {
            Error::source_unavailable(SOURCE_NAME, format!("row {}: {}", row_idx + 1, e))
        })?;
        rows.push(row);
    }

    FrequencyTable::from_rows(rows).map_err(|idx| {
        Error::source_unavailable(
            SOURCE_NAME,
            format!("row {}: ranks must start at 1 and strictly increase", idx + 1),
        )
    })
}

/// Load the frequency list from a CSV file.
pub fn load_frequency_table(path: &Path) -> Result<FrequencyTable> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::source_unavailable(SOURCE_NAME, format!("{}: {}", path.display(), e)))?;
    let table = parse_frequency_csv(&content)?;
    log::info!("Loaded {} frequency rows from {}", table.len(), path.display());
    Ok(table)
}

/// Render rows as CSV with a `rank,word,count` header.
pub fn frequency_csv(rows: &[FrequencyRow]) -> std::io::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write rows to `path` as CSV, replacing any existing file atomically.
pub fn save_frequency_table(path: &Path, rows: &[FrequencyRow]) -> Result<()> {
    let csv = frequency_csv(rows).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, csv.as_bytes())?;
    log::info!("Wrote {} frequency rows to {}", rows.len(), path.display());
    Ok(())
}
