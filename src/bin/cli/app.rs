use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use wiki2anki::dictionary::{DefinitionResolver, WiktionaryClient};
use wiki2anki::frequency::{load_frequency_table, FrequencyTable};
use wiki2anki::page::{build_http_client, PageFetcher};
use wiki2anki::{Config, Pipeline, PipelineOptions};

use crate::Overrides;

/// Shared state for CLI commands
pub struct App {
    pub config: Config,
    client: Client,
}

impl App {
    /// Load config, apply command-line overrides and set up the HTTP client
    pub fn new(config_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = Config::load(config_path).context("Failed to load config")?;
        apply_overrides(&mut config, overrides);
        config.validate().context("Invalid options")?;

        let client = build_http_client(&config.user_agent, config.request_timeout())
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn fetcher(&self) -> PageFetcher {
        PageFetcher::new(self.client.clone())
    }

    pub fn resolver(&self) -> DefinitionResolver {
        let source = WiktionaryClient::new(self.client.clone(), &self.config.wiktionary_url);
        DefinitionResolver::new(Arc::new(source), self.config.language.clone())
    }

    pub fn load_table(&self) -> Result<FrequencyTable> {
        load_frequency_table(&self.config.frequency_list).with_context(|| {
            format!(
                "Failed to load frequency list {} (run `wiki2anki frequency` to download it)",
                self.config.frequency_list.display()
            )
        })
    }

    pub fn pipeline(&self) -> Result<Pipeline> {
        let table = self.load_table()?;
        Ok(Pipeline::new(
            &table,
            self.resolver(),
            PipelineOptions::from(&self.config),
        ))
    }

    /// Text of the configured region of the page at `url`
    pub async fn article_text(&self, url: &str) -> Result<String> {
        self.fetcher()
            .fetch_region_text(url, &self.config.text_region)
            .await
            .with_context(|| format!("Failed to read article {}", url))
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(language) = &overrides.language {
        config.language = language.clone();
    }
    if let Some(top) = overrides.top {
        config.top_n = top;
    }
    if let Some(max_words) = overrides.max_words {
        config.max_words = max_words;
    }
    if let Some(path) = &overrides.frequency_list {
        config.frequency_list = path.clone();
    }
    if let Some(concurrency) = overrides.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(timeout) = overrides.timeout {
        config.timeout_secs = Some(timeout);
    }
    if let Some(region) = &overrides.region {
        config.text_region = region.clone();
    }
}
