//! Business logic and storage trait definitions for Aura.
//!
//! This crate defines the `KvStore` port that the infrastructure layer
//! implements, plus everything that runs on top of it: the keyword rule
//! engine, the capped message log, the carousel and hero state machines, and
//! the session gate. It depends only on `aura-types` -- never on `aura-infra`
//! or any database/terminal crate.

pub mod carousel;
pub mod chat;
pub mod session;
pub mod storage;
