//! Storage abstractions for Aura.
//!
//! Defines the key-value store trait. The SQLite implementation lives in
//! aura-infra; an in-memory one is provided here for tests and ephemeral use.

pub mod kv_store;
pub mod memory;
