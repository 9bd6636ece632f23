//! Key-value store trait.
//!
//! Models browser-style local storage: string keys, string values, no
//! expiry. Callers own the encoding of structured values.

use aura_types::error::RepositoryError;

/// Trait for local key-value persistent storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Remove a key. No-op if the key does not exist.
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
