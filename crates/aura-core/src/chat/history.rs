//! Capped, persisted chat history.
//!
//! The log is stored as a JSON array under [`HISTORY_KEY`]. Loading never
//! fails: a missing, empty, or unreadable entry yields a log containing only
//! the greeting. Every append persists the whole (truncated) sequence.

use tracing::{debug, warn};

use aura_types::error::RepositoryError;
use aura_types::message::{ChatMessage, Sender};

use crate::storage::kv_store::KvStore;

/// Storage key holding the serialized history.
pub const HISTORY_KEY: &str = "aura_chat_history";

/// Ordered message log backed by a `KvStore`.
pub struct MessageLog<S> {
    store: S,
    messages: Vec<ChatMessage>,
    limit: usize,
    greeting: String,
}

impl<S: KvStore> MessageLog<S> {
    /// Rehydrate the log from storage.
    ///
    /// `limit` is clamped to at least 1. A stored history longer than the
    /// limit is trimmed to its most recent entries.
    pub async fn load(store: S, limit: usize, greeting: impl Into<String>) -> Self {
        let limit = limit.max(1);
        let greeting = greeting.into();

        let mut messages = match store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
                Ok(messages) => messages,
                Err(e) => {
                    warn!(error = %e, "stored chat history is unreadable, starting fresh");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read chat history, starting fresh");
                Vec::new()
            }
        };

        if messages.is_empty() {
            messages = vec![ChatMessage::ai(greeting.clone())];
        }
        truncate_front(&mut messages, limit);
        debug!(count = messages.len(), "chat history loaded");

        Self {
            store,
            messages,
            limit,
            greeting,
        }
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append a message, drop the oldest beyond the limit, and persist.
    ///
    /// The in-memory log is updated even if persisting fails.
    pub async fn append(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
    ) -> Result<&ChatMessage, RepositoryError> {
        self.messages.push(ChatMessage::new(sender, text));
        truncate_front(&mut self.messages, self.limit);
        self.persist().await?;
        // Non-empty: a message was just pushed and limit >= 1.
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Delete the persisted history and reseed with the greeting.
    pub async fn clear(&mut self) -> Result<(), RepositoryError> {
        self.messages = vec![ChatMessage::ai(self.greeting.clone())];
        self.store.remove(HISTORY_KEY).await?;
        debug!("chat history cleared");
        Ok(())
    }

    async fn persist(&self) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(&self.messages)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        self.store.set(HISTORY_KEY, &raw).await
    }
}

/// Keep only the last `limit` entries, preserving order.
fn truncate_front(messages: &mut Vec<ChatMessage>, limit: usize) {
    if messages.len() > limit {
        let excess = messages.len() - limit;
        messages.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryKvStore;
    use aura_types::config::DEFAULT_GREETING;

    async fn load(store: &MemoryKvStore) -> MessageLog<MemoryKvStore> {
        MessageLog::load(store.clone(), 50, DEFAULT_GREETING).await
    }

    async fn persisted(store: &MemoryKvStore) -> Vec<ChatMessage> {
        let raw = store.get(HISTORY_KEY).await.unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_seeds_greeting() {
        let store = MemoryKvStore::new();
        let log = load(&store).await;
        assert_eq!(log.messages(), [ChatMessage::ai(DEFAULT_GREETING)]);
        // Seeding alone does not write.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_history_seeds_single_greeting() {
        let store = MemoryKvStore::new();
        for raw in ["{not json", "null", "[]", r#"[{"sender":"robot","text":"x"}]"#] {
            store.set(HISTORY_KEY, raw).await.unwrap();
            let log = load(&store).await;
            assert_eq!(log.len(), 1, "raw: {raw}");
            assert_eq!(log.messages()[0], ChatMessage::ai(DEFAULT_GREETING));
        }
    }

    #[tokio::test]
    async fn test_append_persists_full_sequence() {
        let store = MemoryKvStore::new();
        let mut log = load(&store).await;

        let appended = log.append(Sender::User, "hello").await.unwrap().clone();
        assert_eq!(appended, ChatMessage::user("hello"));
        log.append(Sender::Ai, "Ready to train.").await.unwrap();

        let stored = persisted(&store).await;
        assert_eq!(stored.len(), 3);
        assert_eq!(stored, log.messages());
        assert_eq!(stored[0].sender, Sender::Ai);
        assert_eq!(stored[1], ChatMessage::user("hello"));
    }

    #[tokio::test]
    async fn test_append_past_cap_keeps_most_recent_fifty() {
        let store = MemoryKvStore::new();
        let mut log = load(&store).await;
        // Greeting + 50 appends = 51 messages.
        for i in 0..50 {
            log.append(Sender::User, format!("msg {i}")).await.unwrap();
        }

        assert_eq!(log.len(), 50);
        assert_eq!(log.messages()[0], ChatMessage::user("msg 0"));
        assert_eq!(log.last().unwrap(), &ChatMessage::user("msg 49"));
        let texts: Vec<&str> = log.messages().iter().map(|m| m.text.as_str()).collect();
        let expected: Vec<String> = (0..50).map(|i| format!("msg {i}")).collect();
        assert_eq!(texts, expected);
        assert_eq!(persisted(&store).await, log.messages());
    }

    #[tokio::test]
    async fn test_reload_round_trips_through_store() {
        let store = MemoryKvStore::new();
        let mut log = load(&store).await;
        log.append(Sender::User, "protein?").await.unwrap();
        drop(log);

        let reloaded = load(&store).await;
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.last().unwrap().text, "protein?");
    }

    #[tokio::test]
    async fn test_oversized_stored_history_is_trimmed_on_load() {
        let store = MemoryKvStore::new();
        let long: Vec<ChatMessage> = (0..10).map(|i| ChatMessage::user(format!("{i}"))).collect();
        store
            .set(HISTORY_KEY, &serde_json::to_string(&long).unwrap())
            .await
            .unwrap();

        let log = MessageLog::load(store.clone(), 4, DEFAULT_GREETING).await;
        let texts: Vec<&str> = log.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["6", "7", "8", "9"]);
    }

    #[tokio::test]
    async fn test_zero_limit_is_clamped() {
        let store = MemoryKvStore::new();
        let mut log = MessageLog::load(store, 0, "hi").await;
        assert_eq!(log.limit(), 1);
        log.append(Sender::User, "a").await.unwrap();
        log.append(Sender::User, "b").await.unwrap();
        assert_eq!(log.messages(), [ChatMessage::user("b")]);
    }

    #[tokio::test]
    async fn test_clear_removes_key_and_reseeds() {
        let store = MemoryKvStore::new();
        let mut log = load(&store).await;
        log.append(Sender::User, "legs").await.unwrap();
        assert!(store.get(HISTORY_KEY).await.unwrap().is_some());

        log.clear().await.unwrap();
        assert_eq!(log.messages(), [ChatMessage::ai(DEFAULT_GREETING)]);
        assert!(store.get(HISTORY_KEY).await.unwrap().is_none());
    }
}
