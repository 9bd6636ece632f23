//! Offline coach chat: keyword rules, reply selection, and the capped
//! message log they feed.

pub mod engine;
pub mod history;
pub mod rules;
pub mod service;
