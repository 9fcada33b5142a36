//! Scraper for the Wiktionary frequency-list pages.
//!
//! The page body holds several tables of `rank | word | count`, each with
//! a title row first. All tables are concatenated in page order.

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{FrequencyRow, FrequencyTable};
use crate::error::{Error, Result};
use crate::page::{extract_element_by_id, inline_text, PageFetcher};

/// Project Gutenberg 2006 list, ranks 1-10000
pub const DEFAULT_FREQUENCY_URL: &str =
    "https://en.wiktionary.org/wiki/Wiktionary:Frequency_lists/PG/2006/04/1-10000";

const CONTENT_REGION: &str = "mw-content-text";

static TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<table\b[^>]*>(.*?)</table>").expect("valid table pattern"));
static ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").expect("valid row pattern"));
static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").expect("valid cell pattern"));

/// Parse every frequency table in a Wiktionary frequency-list page.
pub fn parse_frequency_page(html: &str) -> Result<Vec<FrequencyRow>> {
    let content = extract_element_by_id(html, CONTENT_REGION).ok_or_else(|| {
        Error::source_unavailable(
            "frequency page",
            format!("No element with id '{}'", CONTENT_REGION),
        )
    })?;

    let mut rows = Vec::new();
    for table in TABLE_RE.captures_iter(content) {
        // First row of each table is its title row
        for row in ROW_RE.captures_iter(&table[1]).skip(1) {
            let cells: Vec<String> = CELL_RE
                .captures_iter(&row[1])
                .map(|cell| inline_text(&cell[1]))
                .collect();
            rows.push(parse_row(&cells, rows.len())?);
        }
    }

    if rows.is_empty() {
        return Err(Error::source_unavailable("frequency page", "No frequency rows found"));
    }
    Ok(rows)
}

fn parse_row(cells: &[String], row_idx: usize) -> Result<FrequencyRow> {
    let malformed = |what: &str| {
        Error::source_unavailable("frequency page", format!("row {}: {}", row_idx + 1, what))
    };

    let [rank, word, count] = cells else {
        return Err(malformed(&format!("expected 3 cells, found {}", cells.len())));
    };
    let rank = rank.trim().parse::<u32>().map_err(|_| malformed("bad rank"))?;
    let count = count
        .trim()
        .replace(',', "")
        .parse::<u64>()
        .map_err(|_| malformed("bad count"))?;

    Ok(FrequencyRow {
        rank,
        word: word.trim().to_string(),
        count,
    })
}

/// Download and parse the frequency list at `url`.
pub async fn fetch_frequency_rows(fetcher: &PageFetcher, url: &str) -> Result<Vec<FrequencyRow>> {
    let html = fetcher.fetch_html(url).await?;
    let rows = parse_frequency_page(&html)?;
    // Same validation the CSV loader applies
    FrequencyTable::from_rows(rows.clone()).map_err(|idx| {
        Error::source_unavailable(
            url,
            format!("row {}: ranks must start at 1 and strictly increase", idx + 1),
        )
    })?;
    log::info!("Scraped {} frequency rows from {}", rows.len(), url);
    Ok(rows)
}
