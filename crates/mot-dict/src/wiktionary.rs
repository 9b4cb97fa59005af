use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{ArticleSource, DictError};

/// MediaWiki extracts client. Serves whichever Wiktionary edition the
/// endpoint points at.
#[derive(Clone)]
pub struct WiktionaryClient {
    client: reqwest::Client,
    /// Full api.php URL of the target edition.
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    extract: Option<String>,
}

impl WiktionaryClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl ArticleSource for WiktionaryClient {
    async fn extract(&self, title: &str) -> Result<Option<String>, DictError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", title),
                ("prop", "extracts"),
                ("explaintext", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DictError::Api(format!("HTTP {}", response.status())));
        }

        let data: QueryResponse = response.json().await?;
        let pages = data
            .query
            .ok_or_else(|| DictError::Decode("missing query object".to_string()))?
            .pages;

        // Missing pages come back keyed "-1" with no extract.
        Ok(pages.into_values().find_map(|page| page.extract))
    }
}
