//! Global configuration types for Aura.
//!
//! `AuraConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

use crate::rule::RuleSpec;

/// Greeting seeded into an empty or unreadable chat history.
pub const DEFAULT_GREETING: &str = "System Online. I am your local fitness assistant. Ask me about muscle groups, nutrition, or recovery strategies.";

/// Top-level configuration, loaded from `~/.aura/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuraConfig {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,
}

/// Chat engine and message log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Maximum number of messages kept in the persisted history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Simulated "thinking" delay before the coach replies, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,

    /// Message seeded into an empty history.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Replacement rule table. Empty means "use the built-in rules".
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

fn default_history_limit() -> usize {
    50
}

fn default_thinking_delay_ms() -> u64 {
    600
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            thinking_delay_ms: default_thinking_delay_ms(),
            greeting: default_greeting(),
            rules: Vec::new(),
        }
    }
}

/// Carousel geometry and hero animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Fixed width of one card, including its gap.
    #[serde(default = "default_card_width")]
    pub card_width: f64,

    /// Duration of the hero close animation before overrides are cleared.
    #[serde(default = "default_hero_close_ms")]
    pub hero_close_ms: u64,
}

fn default_card_width() -> f64 {
    340.0
}

fn default_hero_close_ms() -> u64 {
    500
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            hero_close_ms: default_hero_close_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Topic;

    #[test]
    fn test_config_default_values() {
        let config = AuraConfig::default();
        assert_eq!(config.chat.history_limit, 50);
        assert_eq!(config.chat.thinking_delay_ms, 600);
        assert_eq!(config.chat.greeting, DEFAULT_GREETING);
        assert!(config.chat.rules.is_empty());
        assert_eq!(config.carousel.card_width, 340.0);
        assert_eq!(config.carousel.hero_close_ms, 500);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AuraConfig = toml::from_str("").unwrap();
        assert_eq!(config.chat.history_limit, 50);
        assert_eq!(config.carousel.hero_close_ms, 500);
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
[chat]
history_limit = 20
thinking_delay_ms = 0

[[chat.rules]]
topic = "greeting"
keywords = ["yo"]
response = "Yo."

[[chat.rules]]
topic = "safety"
keywords = ["ouch"]
response = "Careful."

[carousel]
card_width = 30.0
"#;
        let config: AuraConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.history_limit, 20);
        assert_eq!(config.chat.thinking_delay_ms, 0);
        assert_eq!(config.chat.greeting, DEFAULT_GREETING);
        assert_eq!(config.chat.rules.len(), 2);
        assert_eq!(config.chat.rules[1].topic, Topic::Safety);
        assert_eq!(config.carousel.card_width, 30.0);
        assert_eq!(config.carousel.hero_close_ms, 500);
    }
}
