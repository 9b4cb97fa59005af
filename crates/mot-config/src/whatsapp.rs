use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct WhatsAppConfig {
    /// Cloud API bearer token.
    pub access_token: String,
    /// Sender phone number id.
    pub phone_number_id: String,
    /// Graph API version segment, e.g. "v18.0".
    pub api_version: String,
    /// The one recipient every reply goes to.
    pub recipient_waid: String,
    /// Token echoed back during the webhook subscription handshake.
    pub verify_token: String,
    pub base_url: String,
}

impl WhatsAppConfig {
    pub fn new() -> Self {
        Self {
            access_token: env::var("ACCESS_TOKEN").unwrap_or_default(),
            phone_number_id: env::var("PHONE_NUMBER_ID").unwrap_or_default(),
            api_version: env::var("VERSION").unwrap_or_else(|_| "v18.0".to_string()),
            recipient_waid: env::var("RECIPIENT_WAID").unwrap_or_default(),
            verify_token: env::var("VERIFY_TOKEN").unwrap_or_default(),
            base_url: env::var("GRAPH_BASE_URL")
                .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
        }
    }
}
