//! Reply selection.
//!
//! `ChatEngine` turns one line of user input into a `Reply`: the reset
//! command first, then the first matching trigger rule, then a uniformly
//! random canned fallback. The engine never touches storage; the caller
//! decides what to append or clear.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use aura_types::rule::Topic;

use super::rules::RuleSet;

/// Input that clears the persisted history instead of being answered.
pub const RESET_COMMAND: &str = "/reset";

/// Returned when the reset command is received.
pub const RESET_ACKNOWLEDGEMENT: &str = "Resetting system...";

/// Replies used when no rule matches.
pub const FALLBACK_REPLIES: [&str; 5] = [
    "Interesting. Tell me more about your goals.",
    "I see. Are you focusing on Strength or Hypertrophy?",
    "Could you be more specific? I can help with Exercises, Diet, or Recovery.",
    "Consistency is the key to progress. Keep showing up!",
    "Make sure to track your lifts to ensure Progressive Overload.",
];

/// What the engine decided to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A trigger rule matched.
    Rule { topic: Topic, text: String },
    /// Nothing matched; a canned fallback was picked.
    Fallback(String),
    /// The reset command was received; the log should be cleared.
    Reset(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Rule { text, .. } => text,
            Reply::Fallback(text) | Reply::Reset(text) => text,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, Reply::Reset(_))
    }
}

/// Rule-based reply engine, generic over its random source.
pub struct ChatEngine<R = StdRng> {
    rules: RuleSet,
    rng: R,
}

impl ChatEngine<StdRng> {
    /// Engine with an entropy-seeded RNG.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_rng(rules, StdRng::from_entropy())
    }

    /// Engine with a fixed seed, for reproducible fallback picks.
    pub fn seeded(rules: RuleSet, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ChatEngine<R> {
    pub fn with_rng(rules: RuleSet, rng: R) -> Self {
        Self { rules, rng }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Produce a reply for one line of user input.
    pub fn respond(&mut self, input: &str) -> Reply {
        let text = input.trim().to_lowercase();

        if text == RESET_COMMAND {
            debug!("reset command received");
            return Reply::Reset(RESET_ACKNOWLEDGEMENT.to_string());
        }

        if let Some(rule) = self.rules.first_match(&text) {
            debug!(topic = %rule.topic(), "trigger rule matched");
            return Reply::Rule {
                topic: rule.topic(),
                text: rule.response().to_string(),
            };
        }

        let idx = self.rng.gen_range(0..FALLBACK_REPLIES.len());
        debug!(idx, "no rule matched, using fallback");
        Reply::Fallback(FALLBACK_REPLIES[idx].to_string())
    }
}
