use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use kanal::AsyncSender;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use mot_whatsapp::WebhookPayload;

use crate::dedup::{MemoryLedger, MessageLedger};
use crate::events::AppEvent;
use crate::state::AppState;

/// State shared by the webhook routes.
#[derive(Clone)]
pub(crate) struct WebhookState {
    pub(crate) events_tx: AsyncSender<AppEvent>,
    pub(crate) ledger: Arc<dyn MessageLedger>,
    pub(crate) verify_token: String,
}

/// Webhook listener: subscription handshake on GET, deliveries on POST.
pub async fn webhook_listener(
    state: Arc<AppState>,
    events_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let (bind_addr, verify_token) = {
        let config = state.config.read().await;
        (
            config.server.bind_addr.clone(),
            config.whatsapp.verify_token.clone(),
        )
    };

    let router = router(WebhookState {
        events_tx,
        ledger: Arc::new(MemoryLedger::new()),
        verify_token,
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "webhook listener up");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel_token.cancelled().await })
        .await?;

    Ok(())
}

fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/webhook", get(verify).post(receive))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub(crate) mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub(crate) verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub(crate) challenge: Option<String>,
}

/// Subscription handshake: echo the challenge when the token matches.
pub(crate) async fn verify(
    State(state): State<WebhookState>,
    Query(params): Query<VerifyParams>,
) -> (StatusCode, String) {
    let accepted = params.mode.as_deref() == Some("subscribe")
        && params.verify_token.as_deref() == Some(state.verify_token.as_str());

    if accepted {
        tracing::info!("webhook verified");
        (StatusCode::OK, params.challenge.unwrap_or_default())
    } else {
        tracing::warn!("webhook verification failed");
        (StatusCode::FORBIDDEN, "Verification failed".to_string())
    }
}

/// One webhook delivery: pull out the text message, skip duplicates, hand
/// the rest to the dispatcher.
pub(crate) async fn receive(State(state): State<WebhookState>, body: String) -> StatusCode {
    let payload: WebhookPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "undecodable webhook body");
            return StatusCode::NOT_FOUND;
        }
    };

    let Some(message) = payload.first_text_message() else {
        // Status callbacks and non-text messages land here; nothing to do.
        return StatusCode::OK;
    };

    if state.ledger.seen(&message.message_id).await {
        tracing::info!(message_id = %message.message_id, "duplicate delivery skipped");
        return StatusCode::OK;
    }
    state.ledger.record(&message.message_id).await;

    let event = AppEvent::InboundMessage {
        message_id: message.message_id,
        from: message.from,
        text: message.body,
    };
    if let Err(e) = state.events_tx.send(event).await {
        tracing::error!(error = %e, "dispatcher channel closed");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
