use std::sync::Arc;

use async_trait::async_trait;

use mot_core::bullets;
use mot_core::entry::WordEntry;
use mot_core::error::ResolveFailure;
use mot_core::resolve::{DefinitionResolver, Resolved};
use mot_dict::{DictEntry, DictionaryBackend};

const CATEGORY_HELP: &str = "No need to specify the category every time, but here is the list:\n\u{2022} Noun\n\u{2022} Pronoun\n\u{2022} Verb\n\u{2022} Adjective\n\u{2022} Adverb\n\u{2022} Preposition\n\u{2022} Conjunction\n\u{2022} Interjection\n\u{2022} Article";

/// English strategy: the learner's reference first, the collegiate one as
/// fallback. A reference counts as having the word only when it returns at
/// least one labeled entry; suggestion-only responses do not.
pub struct EnglishResolver {
    primary: Arc<dyn DictionaryBackend>,
    secondary: Arc<dyn DictionaryBackend>,
}

impl EnglishResolver {
    pub fn new(primary: Arc<dyn DictionaryBackend>, secondary: Arc<dyn DictionaryBackend>) -> Self {
        Self { primary, secondary }
    }

    async fn labeled_entries(&self, word: &str) -> Result<Vec<DictEntry>, ResolveFailure> {
        let entries = self.fetch(&self.primary, word).await?;
        if entries.iter().any(|entry| entry.label.is_some()) {
            return Ok(entries);
        }

        tracing::debug!(%word, "not in the learner's reference, trying collegiate");
        let entries = self.fetch(&self.secondary, word).await?;
        if entries.iter().any(|entry| entry.label.is_some()) {
            return Ok(entries);
        }

        Err(ResolveFailure::NotFound { word: word.to_string() })
    }

    async fn fetch(
        &self,
        backend: &Arc<dyn DictionaryBackend>,
        word: &str,
    ) -> Result<Vec<DictEntry>, ResolveFailure> {
        backend.entries(word).await.map_err(|err| {
            tracing::warn!(%word, error = %err, "dictionary reference call failed");
            ResolveFailure::BackendFailed { word: word.to_string() }
        })
    }

    /// No category given: take the first labeled entry. When it carries no
    /// short definitions, retry once against the secondary reference.
    async fn first_labeled(
        &self,
        word: &str,
        entries: &[DictEntry],
    ) -> Result<(String, Vec<String>), ResolveFailure> {
        let first = entries
            .iter()
            .find(|e| e.label.is_some())
            .ok_or_else(|| ResolveFailure::NoDefinition { word: word.to_string() })?;

        if !first.short_defs.is_empty() {
            let label = first.label.clone().unwrap_or_default();
            return Ok((label, first.short_defs.clone()));
        }

        tracing::debug!(%word, "entry has no short definitions, retrying collegiate");
        let retry = self.fetch(&self.secondary, word).await?;
        retry
            .iter()
            .find(|e| e.label.is_some() && !e.short_defs.is_empty())
            .map(|e| (e.label.clone().unwrap_or_default(), e.short_defs.clone()))
            .ok_or_else(|| ResolveFailure::NoDefinition { word: word.to_string() })
    }
}

#[async_trait]
impl DefinitionResolver for EnglishResolver {
    fn language_code(&self) -> &str {
        "en"
    }

    fn category_help(&self) -> String {
        CATEGORY_HELP.to_string()
    }

    async fn resolve(&self, entry: &WordEntry) -> Result<Resolved, ResolveFailure> {
        let word = entry.word.as_str();
        let entries = self.labeled_entries(word).await?;

        let (category, short_defs) = match entry.category.as_deref() {
            Some(wanted) => {
                let hit = entries
                    .iter()
                    .find(|e| e.label.as_deref() == Some(wanted))
                    .ok_or_else(|| ResolveFailure::CategoryMismatch {
                        word: word.to_string(),
                        category: wanted.to_string(),
                    })?;
                (wanted.to_string(), hit.short_defs.clone())
            }
            None => self.first_labeled(word, &entries).await?,
        };

        if short_defs.is_empty() {
            return Err(ResolveFailure::NoDefinition { word: word.to_string() });
        }

        Ok(Resolved {
            word: word.to_string(),
            category,
            definition: bullets::join_definitions(&short_defs),
            quote: entry.quote.clone(),
        })
    }
}
