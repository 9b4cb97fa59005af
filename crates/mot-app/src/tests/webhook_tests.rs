use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use kanal::AsyncReceiver;
use serde_json::json;
use tokio::time::timeout;

use crate::dedup::{MemoryLedger, MessageLedger};
use crate::events::AppEvent;
use crate::webhook::{VerifyParams, WebhookState, receive, verify};

fn webhook_state() -> (WebhookState, AsyncReceiver<AppEvent>) {
    let (events_tx, events_rx) = kanal::bounded_async(4);
    let state = WebhookState {
        events_tx,
        ledger: Arc::new(MemoryLedger::new()),
        verify_token: "topsecret".to_string(),
    };
    (state, events_rx)
}

fn text_delivery(message_id: &str, body: &str) -> String {
    json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "102290129340398",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "contacts": [{"profile": {"name": "Test"}, "wa_id": "15550009999"}],
                    "messages": [{
                        "from": "15550009999",
                        "id": message_id,
                        "timestamp": "1688000000",
                        "type": "text",
                        "text": {"body": body}
                    }]
                }
            }]
        }]
    })
    .to_string()
}

#[tokio::test]
async fn handshake_echoes_the_challenge() {
    let (state, _events_rx) = webhook_state();
    let params = VerifyParams {
        mode: Some("subscribe".to_string()),
        verify_token: Some("topsecret".to_string()),
        challenge: Some("1158201444".to_string()),
    };

    let (status, body) = verify(State(state), Query(params)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "1158201444");
}

#[tokio::test]
async fn handshake_rejects_a_wrong_token() {
    let (state, _events_rx) = webhook_state();
    let params = VerifyParams {
        mode: Some("subscribe".to_string()),
        verify_token: Some("guess".to_string()),
        challenge: Some("1158201444".to_string()),
    };

    let (status, body) = verify(State(state), Query(params)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Verification failed");
}

#[tokio::test]
async fn handshake_requires_the_subscribe_mode() {
    let (state, _events_rx) = webhook_state();
    let params = VerifyParams {
        mode: None,
        verify_token: Some("topsecret".to_string()),
        challenge: None,
    };

    let (status, _) = verify(State(state), Query(params)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delivery_reaches_the_dispatcher() {
    let (state, events_rx) = webhook_state();

    let status = receive(State(state), text_delivery("wamid.1", "vocab en run")).await;
    assert_eq!(status, StatusCode::OK);

    let event = timeout(Duration::from_secs(2), events_rx.recv())
        .await
        .expect("event should arrive")
        .unwrap();
    let AppEvent::InboundMessage {
        message_id,
        from,
        text,
    } = event;
    assert_eq!(message_id, "wamid.1");
    assert_eq!(from, "15550009999");
    assert_eq!(text, "vocab en run");
}

#[tokio::test]
async fn redelivered_message_is_dispatched_once() {
    let (state, events_rx) = webhook_state();
    let body = text_delivery("wamid.dup", "vocab en run");

    assert_eq!(receive(State(state.clone()), body.clone()).await, StatusCode::OK);
    // Keep `state` (and its events_tx clone) alive so the channel stays open
    // while we assert that nothing further arrives.
    assert_eq!(receive(State(state.clone()), body).await, StatusCode::OK);

    let event = timeout(Duration::from_secs(2), events_rx.recv())
        .await
        .expect("first delivery should arrive")
        .unwrap();
    let AppEvent::InboundMessage { message_id, .. } = event;
    assert_eq!(message_id, "wamid.dup");

    assert!(
        timeout(Duration::from_millis(50), events_rx.recv())
            .await
            .is_err(),
        "second delivery should have been skipped"
    );
}

#[tokio::test]
async fn status_callback_is_acknowledged_without_an_event() {
    let (state, events_rx) = webhook_state();
    let body = json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "changes": [{
                "field": "messages",
                "value": {
                    "statuses": [{"id": "wamid.9", "status": "delivered"}]
                }
            }]
        }]
    })
    .to_string();

    // Keep `state` (and its events_tx clone) alive so the channel stays open
    // while we assert that nothing arrives.
    assert_eq!(receive(State(state.clone()), body).await, StatusCode::OK);
    assert!(
        timeout(Duration::from_millis(50), events_rx.recv())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn undecodable_body_is_rejected() {
    let (state, _events_rx) = webhook_state();

    let status = receive(State(state), "not a webhook".to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ledger_remembers_recorded_ids() {
    let ledger = MemoryLedger::new();

    assert!(!ledger.seen("wamid.a").await);
    ledger.record("wamid.a").await;
    assert!(ledger.seen("wamid.a").await);
    assert!(!ledger.seen("wamid.b").await);
}
