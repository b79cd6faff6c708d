mod memory;
mod redis;

pub use memory::MemoryStore;
pub use self::redis::RedisStore;

use async_trait::async_trait;
use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;
use crate::cli::Args;
use crate::models::chat::{ Message, Role };

/// Ordered append-only log of the chat exchange. Implementations serialize
/// the id-allocate-then-push sequence so ids stay unique and strictly
/// increasing under concurrent requests.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn append(
        &self,
        role: Role,
        content: &str
    ) -> Result<Message, Box<dyn Error + Send + Sync>>;

    /// Full history in chronological (append) order.
    async fn list(&self) -> Result<Vec<Message>, Box<dyn Error + Send + Sync>>;

    /// Wipes the history and restarts id allocation. Idempotent.
    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn backend_name(&self) -> &'static str;
}

pub async fn create_store(
    args: &Args
) -> Result<Arc<dyn ConversationStore>, Box<dyn Error + Send + Sync>> {
    match args.history_type.to_lowercase().as_str() {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "redis" => {
            match RedisStore::connect(args).await {
                Ok(store) => Ok(Arc::new(store)),
                Err(e) => {
                    // Unreachable Redis downgrades to the volatile store at
                    // boot rather than failing every request later.
                    warn!("Redis history store unavailable ({}). Using in-memory storage.", e);
                    Ok(Arc::new(MemoryStore::new()))
                }
            }
        }
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported history store type: {}", args.history_type)
                    )
                )
            ),
    }
}

pub async fn initialize_store(
    args: &Args
) -> Result<Arc<dyn ConversationStore>, Box<dyn Error + Send + Sync>> {
    info!("Chat history will be stored in: {}", args.history_type);
    let store = create_store(args).await?;
    info!("History store ready: {}", store.backend_name());
    Ok(store)
}
