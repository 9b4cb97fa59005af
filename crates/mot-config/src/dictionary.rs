use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct DictionaryConfig {
    /// dictionaryapi.com key for the learner's reference.
    pub learners_key: String,
    /// dictionaryapi.com key for the collegiate reference.
    pub collegiate_key: String,
    pub base_url: String,
    /// MediaWiki api.php endpoint of the English-language edition.
    pub wiktionary_en: String,
    /// MediaWiki api.php endpoint of the French-language edition.
    pub wiktionary_fr: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            learners_key: env::var("DICT_LEARNER_KEY").unwrap_or_default(),
            collegiate_key: env::var("DICT_DICT_KEY").unwrap_or_default(),
            base_url: env::var("DICT_BASE_URL")
                .unwrap_or_else(|_| "https://www.dictionaryapi.com".to_string()),
            wiktionary_en: env::var("WIKTIONARY_EN_URL")
                .unwrap_or_else(|_| "https://en.wiktionary.org/w/api.php".to_string()),
            wiktionary_fr: env::var("WIKTIONARY_FR_URL")
                .unwrap_or_else(|_| "https://fr.wiktionary.org/w/api.php".to_string()),
        }
    }
}
