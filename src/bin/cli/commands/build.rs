use std::path::Path;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use wiki2anki::deck::write_deck;

use crate::app::App;
use crate::render::terminal::{render_card, warning};
use crate::OutputFormat;

pub async fn run(
    app: &App,
    url: &str,
    output: Option<&Path>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    // Everything that can abort the run happens before the first lookup
    let pipeline = app.pipeline()?;
    let text = app.article_text(url).await?;

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted; finishing with the words resolved so far");
            interrupt.cancel();
        }
    });

    let deck = pipeline.build_deck_with_cancel(&text, &cancel).await;

    if let Some(path) = output {
        write_deck(path, &deck.as_string())
            .with_context(|| format!("Failed to save deck to {}", path.display()))?;

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "url": url,
                    "path": path.to_string_lossy(),
                    "cards": deck.len(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Plain => {
                println!("Wrote {} cards to {}", deck.len(), path.display());
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&deck)?);
        }
        OutputFormat::Plain => {
            if deck.is_empty() {
                eprintln!("{}", warning(&format!("No cards found for {}", url), use_color));
                return Ok(());
            }
            for entry in deck.entries() {
                if let Some(line) = render_card(entry, use_color) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
