use async_trait::async_trait;

/// A synthesized clip, ready to upload as a voice note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Text-to-speech seam for the `dis` / `say` flows.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` spoken in `lang` ("en", "fr").
    async fn synthesize(&self, lang: &str, text: &str) -> Result<AudioClip, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("TTS endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("TTS endpoint returned an empty clip")]
    Empty,
}

/// Google Translate's unofficial TTS endpoint; answers with an MP3 clip.
#[derive(Clone)]
pub struct TranslateTts {
    client: reqwest::Client,
    base_url: String,
}

impl TranslateTts {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for TranslateTts {
    async fn synthesize(&self, lang: &str, text: &str) -> Result<AudioClip, SpeechError> {
        let url = format!("{}/translate_tts", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("ie", "UTF-8"), ("client", "tw-ob"), ("tl", lang), ("q", text)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(SpeechError::Empty);
        }

        Ok(AudioClip {
            bytes,
            mime_type: "audio/mpeg".to_string(),
        })
    }
}
