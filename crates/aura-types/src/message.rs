//! Chat message types.
//!
//! A conversation is an ordered list of `ChatMessage`s, each tagged with the
//! side that produced it. The serialized form (`{"sender":"user","text":...}`)
//! is what gets persisted under the chat history key.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Ai => write!(f, "ai"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "ai" => Ok(Sender::Ai),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Sender::Ai, text)
    }
}
