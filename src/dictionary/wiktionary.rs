//! Wiktionary definition lookups over the REST API.
//!
//! `GET {base}/api/rest_v1/page/definition/{word}` answers with a map from
//! language code to a list of usages:
//! ```json
//! {"en": [{"partOfSpeech": "Noun", "language": "English",
//!          "definitions": [{"definition": "A <a href=\"...\">canine</a> ..."}]}]}
//! ```
//! Usages for the configured language are folded into one
//! [`DictionaryEntry`]; every usage becomes a [`DefinitionGroup`] whose
//! first text element is its part of speech.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::models::{DefinitionGroup, DictionaryEntry, LookupError};
use super::source::DefinitionSource;
use crate::page::html_to_text;

pub const DEFAULT_WIKTIONARY_URL: &str = "https://en.wiktionary.org";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestUsage {
    #[serde(default)]
    part_of_speech: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    definitions: Vec<RestDefinition>,
}

#[derive(Debug, Deserialize)]
struct RestDefinition {
    #[serde(default)]
    definition: String,
}

type RestResponse = BTreeMap<String, Vec<RestUsage>>;

/// Wiktionary client for definition lookups
#[derive(Debug, Clone)]
pub struct WiktionaryClient {
    client: Client,
    base_url: String,
}

impl WiktionaryClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, word: &str) -> String {
        format!(
            "{}/api/rest_v1/page/definition/{}",
            self.base_url,
            urlencoding::encode(word)
        )
    }
}

#[async_trait]
impl DefinitionSource for WiktionaryClient {
    async fn entries(
        &self,
        word: &str,
        language: &str,
    ) -> Result<Vec<DictionaryEntry>, LookupError> {
        if word.is_empty() {
            return Ok(Vec::new());
        }

        log::debug!("Getting definition for '{}'", word);
        let response = self.client.get(self.url(word)).send().await?;

        match response.status() {
            // No page at all for this word
            StatusCode::NOT_FOUND => return Ok(Vec::new()),
            status if !status.is_success() => {
                return Err(LookupError::Status {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let body = response.text().await?;
        parse_definition_response(word, language, &body)
    }

    fn name(&self) -> &str {
        "Wiktionary"
    }
}

/// Convert a REST definition response into typed entries for `language`.
///
/// `language` matches either the language name (`"english"`) or the
/// response key (`"en"`), ignoring case.
pub fn parse_definition_response(
    word: &str,
    language: &str,
    body: &str,
) -> Result<Vec<DictionaryEntry>, LookupError> {
    let response: RestResponse =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedEntry {
            word: word.to_string(),
            reason: format!("unexpected response shape: {}", e),
        })?;

    let definitions: Vec<DefinitionGroup> = response
        .into_iter()
        .flat_map(|(code, usages)| {
            let code_matches = code.eq_ignore_ascii_case(language);
            usages
                .into_iter()
                .filter(move |usage| {
                    code_matches || usage.language.eq_ignore_ascii_case(language)
                })
        })
        .map(|usage| {
            let senses = usage
                .definitions
                .iter()
                .map(|d| sense_text(&d.definition))
                .filter(|text| !text.is_empty());
            DefinitionGroup::new(usage.part_of_speech.trim(), senses)
        })
        .collect();

    if definitions.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![DictionaryEntry { definitions }])
}

/// A sense is one line: block markup inside a definition must not split it.
fn sense_text(html: &str) -> String {
    html_to_text(html)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DefinitionResolver;
    use crate::test_server::{client, serve};
    use std::sync::Arc;

    const FOX: &str = r#"{
        "en": [
            {"partOfSpeech": "Noun", "language": "English", "definitions": [
                {"definition": "A red or grey <a href=\"/wiki/canine\">wild canine</a>.",
                 "examples": []},
                {"definition": "A cunning person."}
            ]},
            {"partOfSpeech": "Verb", "language": "English", "definitions": [
                {"definition": "To trick."}
            ]}
        ],
        "de": [
            {"partOfSpeech": "Noun", "language": "German", "definitions": [
                {"definition": "Fuchs"}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_definition_response() {
        let entries = parse_definition_response("fox", "english", FOX).unwrap();
        assert_eq!(entries.len(), 1);
        let groups = &entries[0].definitions;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].part_of_speech, "Noun");
        assert_eq!(
            groups[0].text,
            vec!["Noun", "A red or grey wild canine.", "A cunning person."]
        );
        assert_eq!(groups[1].text, vec!["Verb", "To trick."]);
    }

    #[test]
    fn test_parse_definition_response_by_language_code() {
        let entries = parse_definition_response("fox", "de", FOX).unwrap();
        assert_eq!(entries[0].definitions[0].text, vec!["Noun", "Fuchs"]);
    }

    #[test]
    fn test_parse_definition_response_language_missing() {
        let entries = parse_definition_response("fox", "french", FOX).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_definition_response_malformed() {
        let err = parse_definition_response("fox", "english", r#"{"en": "nope"}"#).unwrap_err();
        assert!(matches!(err, LookupError::MalformedEntry { .. }));
    }

    #[test]
    fn test_url_encodes_word() {
        let client = WiktionaryClient::new(Client::new(), "https://en.wiktionary.org/");
        assert_eq!(
            client.url("café au lait"),
            "https://en.wiktionary.org/api/rest_v1/page/definition/caf%C3%A9%20au%20lait"
        );
    }

    #[test]
    fn test_parse_definition_response_keeps_senses_on_one_line() {
        let body = r#"{"en": [{"partOfSpeech": "Noun", "language": "English", "definitions": [
            {"definition": "<p>A small\n  <b>wild</b> dog</p><br><p>of the woods.</p>"}
        ]}]}"#;
        let entries = parse_definition_response("fox", "english", body).unwrap();
        assert_eq!(
            entries[0].definitions[0].text,
            vec!["Noun", "A small wild dog of the woods."]
        );
    }

    #[tokio::test]
    async fn test_entries_from_server() {
        let server = serve(200, "application/json; charset=utf-8", FOX).await;
        let wiktionary = WiktionaryClient::new(client(), &server.base_url);

        let entries = wiktionary.entries("fox", "english").await.unwrap();
        assert_eq!(entries[0].definitions[0].text[1], "A red or grey wild canine.");
        assert_eq!(server.paths(), vec!["/api/rest_v1/page/definition/fox"]);
    }

    #[tokio::test]
    async fn test_entries_not_found_is_empty() {
        let server = serve(404, "application/json", r#"{"title": "Not found."}"#).await;
        let wiktionary = WiktionaryClient::new(client(), &server.base_url);

        let entries = wiktionary.entries("qwxz", "english").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_entries_server_error_is_status() {
        let server = serve(503, "text/plain", "busy").await;
        let wiktionary = WiktionaryClient::new(client(), &server.base_url);

        let err = wiktionary.entries("fox", "english").await.unwrap_err();
        assert!(matches!(err, LookupError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn test_resolver_over_server_error_has_no_definition() {
        let server = serve(503, "text/plain", "busy").await;
        let wiktionary = WiktionaryClient::new(client(), &server.base_url);
        let resolver = DefinitionResolver::new(Arc::new(wiktionary), "english");

        assert_eq!(resolver.resolve("Fox").await, None);
        // Capitalized word gets one lowercase retry
        assert_eq!(server.paths().len(), 2);
    }
}
