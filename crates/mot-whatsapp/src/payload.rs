use serde::Deserialize;

/// Inbound webhook envelope, pared down to the fields the bot reads.
/// Everything is optional; status callbacks share the same shape.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    pub object: Option<String>,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Deserialize)]
pub struct Change {
    pub value: Option<ChangeValue>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeValue {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub id: Option<String>,
    pub from: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<TextBody>,
}

#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub body: String,
}

/// A text message lifted out of the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundText {
    pub message_id: String,
    pub from: String,
    pub body: String,
}

impl WebhookPayload {
    /// The first text message in the envelope, when this is a message
    /// notification. Status callbacks and non-text messages yield None.
    pub fn first_text_message(&self) -> Option<InboundText> {
        self.object.as_ref()?;

        let message = self
            .entry
            .first()?
            .changes
            .first()?
            .value
            .as_ref()?
            .messages
            .first()?;
        let text = message.text.as_ref()?;

        Some(InboundText {
            message_id: message.id.clone().unwrap_or_default(),
            from: message.from.clone().unwrap_or_default(),
            body: text.body.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_envelope(body: &str) -> String {
        format!(
            r#"{{
                "object": "whatsapp_business_account",
                "entry": [{{
                    "id": "1",
                    "changes": [{{
                        "field": "messages",
                        "value": {{
                            "messaging_product": "whatsapp",
                            "messages": [{{
                                "id": "wamid.A1",
                                "from": "33600000000",
                                "timestamp": "1700000000",
                                "type": "text",
                                "text": {{"body": "{body}"}}
                            }}]
                        }}
                    }}]
                }}]
            }}"#
        )
    }

    #[test]
    fn text_message_is_extracted() {
        let payload: WebhookPayload =
            serde_json::from_str(&message_envelope("vocab en run")).unwrap();
        let message = payload.first_text_message().unwrap();
        assert_eq!(message.message_id, "wamid.A1");
        assert_eq!(message.from, "33600000000");
        assert_eq!(message.body, "vocab en run");
    }

    #[test]
    fn status_callback_yields_nothing() {
        let body = r#"{
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "1",
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "statuses": [{"id": "wamid.A1", "status": "delivered"}]
                    }
                }]
            }]
        }"#;
        let payload: WebhookPayload = serde_json::from_str(body).unwrap();
        assert!(payload.first_text_message().is_none());
    }

    #[test]
    fn non_text_message_yields_nothing() {
        let body = r#"{
            "object": "whatsapp_business_account",
            "entry": [{
                "changes": [{
                    "value": {
                        "messages": [{
                            "id": "wamid.A2",
                            "from": "33600000000",
                            "type": "audio",
                            "audio": {"id": "media-1"}
                        }]
                    }
                }]
            }]
        }"#;
        let payload: WebhookPayload = serde_json::from_str(body).unwrap();
        assert!(payload.first_text_message().is_none());
    }

    #[test]
    fn missing_object_field_yields_nothing() {
        let payload: WebhookPayload = serde_json::from_str(r#"{"entry": []}"#).unwrap();
        assert!(payload.first_text_message().is_none());
    }
}
