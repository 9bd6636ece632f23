//! Infrastructure layer for Aura.
//!
//! Contains the implementation of the `KvStore` trait defined in `aura-core`
//! (SQLite with split reader/writer pools), data directory resolution, and
//! `config.toml` loading.

pub mod config;
pub mod filesystem;
pub mod sqlite;
