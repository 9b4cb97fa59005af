mod client;
mod payload;

pub use client::{CloudApiClient, Messenger, WhatsAppError};
pub use payload::{InboundText, WebhookPayload};
