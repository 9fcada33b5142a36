use std::path::Path;

use anyhow::{Context, Result};

use wiki2anki::frequency::{fetch_frequency_rows, save_frequency_table};

use crate::app::App;
use crate::OutputFormat;

pub async fn run(
    app: &App,
    url: Option<&str>,
    out: Option<&Path>,
    format: &OutputFormat,
) -> Result<()> {
    let url = url.unwrap_or(&app.config.frequency_url);
    let out = out.unwrap_or(&app.config.frequency_list);

    let rows = fetch_frequency_rows(&app.fetcher(), url)
        .await
        .with_context(|| format!("Failed to download frequency list from {}", url))?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    save_frequency_table(out, &rows)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "url": url,
                "path": out.to_string_lossy(),
                "rows": rows.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Saved {} words to {}", rows.len(), out.display());
        }
    }

    Ok(())
}
