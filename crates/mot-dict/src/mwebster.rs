use async_trait::async_trait;
use serde::Deserialize;

use crate::{DictEntry, DictError, DictionaryBackend};

/// Which dictionaryapi.com reference to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Learners,
    Collegiate,
}

impl Reference {
    fn path(self) -> &'static str {
        match self {
            Reference::Learners => "learners",
            Reference::Collegiate => "collegiate",
        }
    }
}

/// dictionaryapi.com client, one per reference.
#[derive(Clone)]
pub struct MerriamWebsterClient {
    client: reqwest::Client,
    base_url: String,
    reference: Reference,
    api_key: String,
}

/// Known words come back as entry objects; unknown words come back as an
/// array of plain spelling-suggestion strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Entry {
        fl: Option<String>,
        #[serde(default)]
        shortdef: Vec<String>,
    },
    Suggestion(String),
}

impl MerriamWebsterClient {
    pub fn new(base_url: String, reference: Reference, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            reference,
            api_key,
        }
    }
}

#[async_trait]
impl DictionaryBackend for MerriamWebsterClient {
    async fn entries(&self, word: &str) -> Result<Vec<DictEntry>, DictError> {
        let url = format!(
            "{}/api/v3/references/{}/json/{}",
            self.base_url,
            self.reference.path(),
            word
        );

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DictError::Api(format!("HTTP {}", response.status())));
        }

        let raw: Vec<RawEntry> = response.json().await?;

        Ok(raw
            .into_iter()
            .filter_map(|entry| match entry {
                RawEntry::Entry { fl, shortdef } => Some(DictEntry {
                    label: fl,
                    short_defs: shortdef,
                }),
                RawEntry::Suggestion(_) => None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_objects_decode_with_label_and_shortdefs() {
        let body = r#"[
            {"meta": {"id": "run:1"}, "fl": "verb", "shortdef": ["to move fast", "to operate"]},
            {"meta": {"id": "run:2"}, "fl": "noun", "shortdef": ["an act of running"]}
        ]"#;
        let raw: Vec<RawEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(raw.len(), 2);
        assert!(matches!(
            &raw[0],
            RawEntry::Entry { fl: Some(label), shortdef } if label == "verb" && shortdef.len() == 2
        ));
    }

    #[test]
    fn suggestion_strings_decode_as_suggestions() {
        let body = r#"["ran", "rune", "rung"]"#;
        let raw: Vec<RawEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(raw.len(), 3);
        assert!(raw.iter().all(|entry| matches!(entry, RawEntry::Suggestion(_))));
    }

    #[test]
    fn entries_without_label_or_shortdef_still_decode() {
        let body = r#"[{"meta": {"id": "whom"}, "shortdef": []}]"#;
        let raw: Vec<RawEntry> = serde_json::from_str(body).unwrap();
        assert!(matches!(
            &raw[0],
            RawEntry::Entry { fl: None, shortdef } if shortdef.is_empty()
        ));
    }
}
