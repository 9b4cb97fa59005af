use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct SpeechConfig {
    /// Base URL of the translate TTS endpoint.
    pub base_url: String,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let base_url =
            env::var("TTS_BASE_URL").unwrap_or_else(|_| "https://translate.google.com".to_string());

        Self { base_url }
    }
}
