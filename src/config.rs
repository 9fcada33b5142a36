//! Run configuration, loaded from an optional TOML file.
//!
//! ```toml
//! language = "english"
//! top_n = 5000
//! max_words = 100
//! concurrency = 4
//! frequency_list = "data/english_10000.csv"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dictionary::DEFAULT_WIKTIONARY_URL;
use crate::error::{Error, Result};
use crate::frequency::{DEFAULT_FREQUENCY_URL, DEFAULT_TOP_N};

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "wiki2anki.toml";

pub const DEFAULT_MAX_WORDS: usize = 100;
pub const DEFAULT_CONCURRENCY: usize = 4;

fn default_language() -> String {
    "english".to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_text_region() -> String {
    "bodyContent".to_string()
}

fn default_frequency_list() -> PathBuf {
    PathBuf::from("data/english_10000.csv")
}

fn default_frequency_url() -> String {
    DEFAULT_FREQUENCY_URL.to_string()
}

fn default_wiktionary_url() -> String {
    DEFAULT_WIKTIONARY_URL.to_string()
}

fn default_user_agent() -> String {
    format!("wiki2anki/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dictionary language, e.g. "english"
    #[serde(default = "default_language")]
    pub language: String,
    /// Words ranked within this many rows of the frequency list are common
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Cap on distinct words considered per page
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Dictionary lookups in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Overall budget for dictionary lookups; unfinished words are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Id of the page element holding the article text
    #[serde(default = "default_text_region")]
    pub text_region: String,
    #[serde(default = "default_frequency_list")]
    pub frequency_list: PathBuf,
    #[serde(default = "default_frequency_url")]
    pub frequency_url: String,
    #[serde(default = "default_wiktionary_url")]
    pub wiktionary_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            top_n: default_top_n(),
            max_words: default_max_words(),
            concurrency: default_concurrency(),
            timeout_secs: None,
            text_region: default_text_region(),
            frequency_list: default_frequency_list(),
            frequency_url: default_frequency_url(),
            wiktionary_url: default_wiktionary_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, or
    /// fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(Error::Config("language must not be empty".to_string()));
        }
        if self.concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".to_string()));
        }
        if self.text_region.trim().is_empty() {
            return Err(Error::Config("text_region must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language, "english");
        assert_eq!(config.top_n, 5000);
        assert_eq!(config.max_words, 100);
        assert_eq!(config.text_region, "bodyContent");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml("top_n = 2000\ntimeout_secs = 60\n").unwrap();
        assert_eq!(config.top_n, 2000);
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
        assert_eq!(config.max_words, DEFAULT_MAX_WORDS);
        assert_eq!(config.language, "english");
    }

    #[test]
    fn test_from_toml_rejects_unknown_and_invalid() {
        assert!(matches!(Config::from_toml("colour = 1"), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("concurrency = 0"), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("language = \"\""), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiki2anki.toml");
        std::fs::write(&path, "language = \"german\"\nmax_words = 20\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.language, "german");
        assert_eq!(config.max_words, 20);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
