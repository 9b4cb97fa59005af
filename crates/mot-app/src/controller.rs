use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::state::AppState;
use crate::webhook::webhook_listener;

/// Centralized channel management
pub struct ChannelSet {
    pub webhook_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            webhook_to_app: kanal::bounded_async(64), // webhook burst capacity
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Dispatcher loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.webhook_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Webhook listener
        tasks.spawn(webhook_listener(
            self.state.clone(),
            self.channels.webhook_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
