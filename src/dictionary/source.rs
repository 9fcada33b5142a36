use async_trait::async_trait;

use super::models::{DictionaryEntry, LookupError};

/// Anything that can list dictionary entries for a word.
///
/// An empty result means the source has no entry for that word in the
/// requested language.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn entries(
        &self,
        word: &str,
        language: &str,
    ) -> Result<Vec<DictionaryEntry>, LookupError>;

    /// Short name used in log lines
    fn name(&self) -> &str;
}
