//! Chat service: one user turn end to end.
//!
//! Records the user's message, waits the configured "thinking" delay, asks
//! the engine for a reply, and either appends it or clears the history when
//! the reset command came in.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::info;

use aura_types::error::RepositoryError;
use aura_types::message::Sender;

use super::engine::{ChatEngine, Reply};
use super::history::MessageLog;
use crate::storage::kv_store::KvStore;

/// Owns the engine and the message log for a chat session.
pub struct ChatService<S, R = StdRng> {
    engine: ChatEngine<R>,
    log: MessageLog<S>,
    thinking_delay: Duration,
}

impl<S: KvStore, R: Rng> ChatService<S, R> {
    pub fn new(engine: ChatEngine<R>, log: MessageLog<S>, thinking_delay: Duration) -> Self {
        Self {
            engine,
            log,
            thinking_delay,
        }
    }

    pub fn log(&self) -> &MessageLog<S> {
        &self.log
    }

    pub fn engine(&self) -> &ChatEngine<R> {
        &self.engine
    }

    /// Handle one line of user input.
    ///
    /// Returns `Ok(None)` for blank input. For the reset command the history
    /// is cleared and the acknowledgement is returned without being logged,
    /// so the restarted log holds only the greeting.
    pub async fn send(&mut self, input: &str) -> Result<Option<Reply>, RepositoryError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.log.append(Sender::User, text).await?;

        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        let reply = self.engine.respond(text);
        if reply.is_reset() {
            info!("clearing chat history on request");
            self.log.clear().await?;
        } else {
            self.log.append(Sender::Ai, reply.text()).await?;
        }

        Ok(Some(reply))
    }
}
