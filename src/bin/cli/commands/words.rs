use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub async fn run(app: &App, url: &str, format: &OutputFormat) -> Result<()> {
    let pipeline = app.pipeline()?;
    let text = app.article_text(url).await?;
    let candidates = pipeline.candidates(&text);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }
        OutputFormat::Plain => {
            for word in &candidates {
                println!("{}", word);
            }
        }
    }

    Ok(())
}
