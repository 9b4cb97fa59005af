use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

/// Records which webhook message ids were already dispatched. WhatsApp
/// redelivers a notification until it gets a 200 back, so the same id can
/// arrive more than once.
#[async_trait]
pub trait MessageLedger: Send + Sync {
    async fn seen(&self, message_id: &str) -> bool;
    async fn record(&self, message_id: &str);
}

/// In-process ledger; entries live for the lifetime of the process.
pub struct MemoryLedger {
    seen: Mutex<HashSet<String>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
        }
    }
}

#[async_trait]
impl MessageLedger for MemoryLedger {
    async fn seen(&self, message_id: &str) -> bool {
        self.seen
            .lock()
            .map(|ids| ids.contains(message_id))
            .unwrap_or(false)
    }

    async fn record(&self, message_id: &str) {
        if let Ok(mut ids) = self.seen.lock() {
            ids.insert(message_id.to_string());
        }
    }
}
