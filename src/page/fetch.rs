//! Article fetching: download a page and pull the text of one region out of it.

use std::time::Duration;

use reqwest::Client;

use super::html::{extract_element_by_id, html_to_text};
use crate::error::{Error, Result};

/// Build the HTTP client shared by page, frequency-list and dictionary
/// requests.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(30).min(timeout))
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Fetches HTML pages and extracts named regions
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and return its body as text.
    ///
    /// Any network error, non-success status or non-HTML content type is a
    /// hard failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let parsed_url = reqwest::Url::parse(url)
            .map_err(|e| Error::source_unavailable(url, format!("Invalid URL: {}", e)))?;

        log::info!("Fetching {}", parsed_url);
        let response = self
            .client
            .get(parsed_url.as_str())
            .send()
            .await
            .map_err(|e| {
                Error::source_unavailable(url, format!("Failed to fetch URL: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::source_unavailable(url, format!("HTTP status {}", status)));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return Err(Error::source_unavailable(url, "URL does not return HTML content"));
        }

        let body_bytes = response.bytes().await.map_err(|e| {
            Error::source_unavailable(url, format!("Failed to read response body: {}", e))
        })?;

        Ok(String::from_utf8_lossy(&body_bytes).into_owned())
    }

    /// Fetch `url` and return the plain text of the element with id `region`.
    pub async fn fetch_region_text(&self, url: &str, region: &str) -> Result<String> {
        let html = self.fetch_html(url).await?;
        region_text(&html, region).ok_or_else(|| {
            Error::source_unavailable(url, format!("No element with id '{}'", region))
        })
    }
}

/// Plain text of the element with id `region`, if present.
pub fn region_text(html: &str, region: &str) -> Option<String> {
    extract_element_by_id(html, region).map(html_to_text)
}
