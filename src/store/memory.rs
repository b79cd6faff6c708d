use async_trait::async_trait;
use chrono::Utc;
use std::error::Error;
use tokio::sync::Mutex;

use super::ConversationStore;
use crate::models::chat::{ Message, Role };

const FIRST_ID: u64 = 1;

struct Inner {
    messages: Vec<Message>,
    next_id: u64,
}

/// Volatile store: everything lives behind one mutex so the
/// allocate-id-then-push sequence never interleaves between requests.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                messages: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn append(
        &self,
        role: Role,
        content: &str
    ) -> Result<Message, Box<dyn Error + Send + Sync>> {
        let mut inner = self.inner.lock().await;
        let message = Message {
            id: inner.next_id,
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        inner.next_id += 1;
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<Message>, Box<dyn Error + Send + Sync>> {
        Ok(self.inner.lock().await.messages.clone())
    }

    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut inner = self.inner.lock().await;
        inner.messages.clear();
        // Ids restart after a wipe; uniqueness holds within a history epoch.
        inner.next_id = FIRST_ID;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
