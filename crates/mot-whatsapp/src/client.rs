use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Replies only wait this long; webhook handling must not hang on Meta.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound message surface: plain text and synthesized audio.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, recipient: &str, text: &str) -> Result<(), WhatsAppError>;

    /// Upload the clip as media, then send it as an audio message.
    async fn send_audio(
        &self,
        recipient: &str,
        audio: &[u8],
        mime_type: &str,
    ) -> Result<(), WhatsAppError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WhatsAppError {
    #[error("Request timed out")]
    Timeout,
    #[error("Cloud API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Media upload returned no id")]
    NoMediaId,
}

impl From<reqwest::Error> for WhatsAppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WhatsAppError::Timeout
        } else {
            WhatsAppError::Network(err)
        }
    }
}

/// WhatsApp Cloud API client for one sender phone number.
#[derive(Clone)]
pub struct CloudApiClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    phone_number_id: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct MediaResponse {
    id: Option<String>,
}

impl CloudApiClient {
    pub fn new(
        base_url: String,
        api_version: String,
        phone_number_id: String,
        access_token: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_version,
            phone_number_id,
            access_token,
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, self.api_version, self.phone_number_id, resource
        )
    }

    async fn upload_media(&self, audio: &[u8], mime_type: &str) -> Result<String, WhatsAppError> {
        let part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name("audio.mp3")
            .mime_str(mime_type)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("messaging_product", "whatsapp");

        let response = self
            .client
            .post(self.endpoint("media"))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let uploaded: MediaResponse = response.json().await?;
        uploaded.id.ok_or(WhatsAppError::NoMediaId)
    }
}

#[async_trait]
impl Messenger for CloudApiClient {
    async fn send_text(&self, recipient: &str, text: &str) -> Result<(), WhatsAppError> {
        let payload = json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": recipient,
            "type": "text",
            "text": {"preview_url": false, "body": text},
        });

        let response = self
            .client
            .post(self.endpoint("messages"))
            .bearer_auth(&self.access_token)
            .json(&payload)
            .timeout(SEND_TIMEOUT)
            .send()
            .await?;
        let response = check_status(response).await?;

        tracing::info!(status = %response.status(), "text message delivered");
        Ok(())
    }

    async fn send_audio(
        &self,
        recipient: &str,
        audio: &[u8],
        mime_type: &str,
    ) -> Result<(), WhatsAppError> {
        let media_id = self.upload_media(audio, mime_type).await?;
        tracing::info!(%media_id, "media uploaded");

        let payload = json!({
            "messaging_product": "whatsapp",
            "to": recipient,
            "type": "audio",
            "audio": {"id": media_id},
        });

        let response = self
            .client
            .post(self.endpoint("messages"))
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await?;
        check_status(response).await?;

        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, WhatsAppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(WhatsAppError::Status {
        status: status.as_u16(),
        body,
    })
}
