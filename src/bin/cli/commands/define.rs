use anyhow::Result;

use wiki2anki::ResolvedEntry;

use crate::app::App;
use crate::render::terminal::{render_card, warning};
use crate::OutputFormat;

pub async fn run(app: &App, word: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let resolver = app.resolver();
    let entry = ResolvedEntry::new(word, resolver.resolve(word).await);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "word": entry.word,
                "language": resolver.language(),
                "definition": entry.definition,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match render_card(&entry, use_color) {
            Some(line) => println!("{}", line),
            None => eprintln!(
                "{}",
                warning(
                    &format!("No {} definition found for '{}'", resolver.language(), word),
                    use_color
                )
            ),
        },
    }

    Ok(())
}
