//! Shared domain types for Aura.
//!
//! This crate contains the core domain types used across the Aura workspace:
//! chat messages, trigger rule definitions, exercise cards, pages, layout
//! primitives, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod exercise;
pub mod layout;
pub mod message;
pub mod rule;
pub mod session;
