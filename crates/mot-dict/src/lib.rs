use async_trait::async_trait;

pub mod mwebster;
pub mod wiktionary;

pub use mwebster::{MerriamWebsterClient, Reference};
pub use wiktionary::WiktionaryClient;

/// One dictionary entry as the English strategy consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    /// Grammatical category, the "functional label". Absent on entries that
    /// only carry cross-references.
    pub label: Option<String>,
    pub short_defs: Vec<String>,
}

/// A word-entry reference: short definitions grouped under labeled entries.
#[async_trait]
pub trait DictionaryBackend: Send + Sync {
    /// All entries for `word`. Spelling suggestions for unknown words are
    /// dropped; an unknown word yields an empty list.
    async fn entries(&self, word: &str) -> Result<Vec<DictEntry>, DictError>;
}

/// An article source serving plain-text extracts by page title.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// The page's plain-text extract, or None when the page is missing.
    async fn extract(&self, title: &str) -> Result<Option<String>, DictError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}
