use async_trait::async_trait;
use chrono::Utc;
use log::error;
use redis::{ AsyncCommands, Client };
use std::error::Error;
use tokio::sync::Mutex;

use super::ConversationStore;
use crate::cli::Args;
use crate::models::chat::{ Message, Role };

/// Durable store: messages are RPUSH'd as JSON onto a single list, ids come
/// from INCR on a counter key so they stay unique across processes. A write
/// lock keeps the INCR and RPUSH round-trips from interleaving between
/// concurrent requests, so list order matches id order.
pub struct RedisStore {
    client: Client,
    list_key: String,
    counter_key: String,
    write_lock: Mutex<()>,
}

impl RedisStore {
    pub async fn connect(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let client = Client::open(args.history_host.as_str())?;

        // Probe the server once so an unreachable Redis is caught at boot.
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<_, ()>(&mut conn).await?;

        Ok(Self {
            client,
            list_key: format!("{}messages", args.history_redis_prefix),
            counter_key: format!("{}next_id", args.history_redis_prefix),
            write_lock: Mutex::new(()),
        })
    }

    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }
}

#[async_trait]
impl ConversationStore for RedisStore {
    async fn append(
        &self,
        role: Role,
        content: &str
    ) -> Result<Message, Box<dyn Error + Send + Sync>> {
        // Held across both round-trips: without it, INCR(a), INCR(b),
        // RPUSH(b), RPUSH(a) could leave the list out of id order.
        let _guard = self.write_lock.lock().await;

        let mut conn = self.get_connection().await?;
        let id: u64 = conn.incr(&self.counter_key, 1u64).await?;

        let message = Message {
            id,
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        };

        let json_msg = serde_json::to_string(&message)?;
        let _: i64 = conn.rpush(&self.list_key, &json_msg).await?;
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<Message>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.get_connection().await?;
        let json_entries: Vec<String> = conn.lrange(&self.list_key, 0, -1).await?;
        let mut messages = Vec::with_capacity(json_entries.len());

        for json_entry in &json_entries {
            match serde_json::from_str::<Message>(json_entry) {
                Ok(msg) => messages.push(msg),
                Err(e) => {
                    error!("Error parsing history entry: {}", e);
                }
            }
        }

        Ok(messages)
    }

    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut conn = self.get_connection().await?;
        // Dropping the counter key restarts ids, same policy as the memory store.
        let _: () = conn.del(&[self.list_key.clone(), self.counter_key.clone()]).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Arc;

    fn test_args() -> Args {
        Args::parse_from([
            "mockingbird",
            "--history-type",
            "redis",
            "--history-redis-prefix",
            "mockingbird-test:",
        ])
    }

    // Needs a live Redis at redis://127.0.0.1:6379; run with
    // `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn concurrent_appends_keep_list_order_matching_ids() {
        let store = Arc::new(RedisStore::connect(&test_args()).await.unwrap());
        store.clear().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(Role::User, &format!("msg {}", i)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let messages = store.list().await.unwrap();
        assert_eq!(messages.len(), 16);
        let ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        store.clear().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn clear_restarts_id_allocation() {
        let store = RedisStore::connect(&test_args()).await.unwrap();
        store.clear().await.unwrap();

        store.append(Role::User, "one").await.unwrap();
        store.append(Role::Assistant, "two").await.unwrap();
        store.clear().await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        let next = store.append(Role::User, "again").await.unwrap();
        assert_eq!(next.id, 1);

        store.clear().await.unwrap();
    }
}
