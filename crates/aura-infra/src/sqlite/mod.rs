//! SQLite storage for Aura.

pub mod kv;
pub mod pool;
