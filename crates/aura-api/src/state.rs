//! Application state wiring storage, configuration and services together.
//!
//! Services are generic over the `KvStore` trait; AppState pins them to the
//! SQLite implementation.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use aura_core::carousel::Carousel;
use aura_core::carousel::catalog::default_catalog;
use aura_core::chat::engine::ChatEngine;
use aura_core::chat::history::MessageLog;
use aura_core::chat::rules::RuleSet;
use aura_core::chat::service::ChatService;
use aura_core::session::gate::SessionGate;
use aura_infra::config::load_config;
use aura_infra::filesystem::resolve_data_dir;
use aura_infra::sqlite::kv::SqliteKvStore;
use aura_infra::sqlite::pool::DatabasePool;
use aura_types::config::AuraConfig;

pub type ConcreteChatService = ChatService<SqliteKvStore>;

/// Shared state for all CLI commands.
pub struct AppState {
    pub kv_store: SqliteKvStore,
    pub gate: SessionGate<SqliteKvStore>,
    pub config: AuraConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: data dir, config, database.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        let config = load_config(&data_dir).await;

        let db_pool = DatabasePool::open(&data_dir)
            .await
            .context("Failed to open local storage database")?;
        let kv_store = SqliteKvStore::new(db_pool);
        let gate = SessionGate::new(kv_store.clone());

        Ok(Self {
            kv_store,
            gate,
            config,
            data_dir,
        })
    }

    /// Load the persisted chat history.
    pub async fn message_log(&self) -> MessageLog<SqliteKvStore> {
        MessageLog::load(
            self.kv_store.clone(),
            self.config.chat.history_limit,
            self.config.chat.greeting.clone(),
        )
        .await
    }

    /// Build the chat service from configuration.
    pub async fn chat_service(&self) -> anyhow::Result<ConcreteChatService> {
        let rules = RuleSet::from_config(&self.config.chat.rules)
            .context("Invalid [[chat.rules]] in config.toml")?;
        let log = self.message_log().await;
        Ok(ChatService::new(
            ChatEngine::new(rules),
            log,
            Duration::from_millis(self.config.chat.thinking_delay_ms),
        ))
    }

    /// The exercise carousel, if there are any cards.
    pub fn carousel(&self) -> Option<Carousel> {
        Carousel::new(default_catalog(), self.config.carousel.card_width)
    }
}
