use std::sync::Arc;

use async_trait::async_trait;

use crate::entry::WordEntry;
use crate::error::ResolveFailure;

/// A resolved definition, ready to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub word: String,
    pub category: String,
    /// Stored form: bare for one sense, bulleted lines for several.
    pub definition: String,
    pub quote: Option<String>,
}

/// One strategy per supported language code. Implementations own their
/// reference clients and their language's disambiguation rules.
#[async_trait]
pub trait DefinitionResolver: Send + Sync {
    /// Language code this strategy answers to ("en", "fren", "fr").
    fn language_code(&self) -> &str;

    /// The fixed list of grammatical categories the strategy accepts,
    /// formatted for a reply.
    fn category_help(&self) -> String;

    async fn resolve(&self, entry: &WordEntry) -> Result<Resolved, ResolveFailure>;
}

/// Registry of strategies, looked up by language code.
pub struct ResolverSet {
    resolvers: Vec<Arc<dyn DefinitionResolver>>,
}

impl ResolverSet {
    pub fn new(resolvers: Vec<Arc<dyn DefinitionResolver>>) -> Self {
        Self { resolvers }
    }

    pub fn get(&self, language_code: &str) -> Option<&dyn DefinitionResolver> {
        self.resolvers
            .iter()
            .find(|resolver| resolver.language_code() == language_code)
            .map(|resolver| resolver.as_ref())
    }
}
