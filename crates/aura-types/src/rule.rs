//! Trigger rule definitions.
//!
//! A rule pairs a keyword trigger with a canned response. The rule *engine*
//! lives in aura-core; this module only holds the serializable description so
//! rule tables can be loaded from `config.toml`.

use serde::{Deserialize, Serialize};

use std::fmt;

/// What a trigger rule is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Greeting,
    Farewell,
    Chest,
    Back,
    Legs,
    Arms,
    Core,
    Shoulders,
    Nutrition,
    Protein,
    Carbs,
    Fats,
    FatLoss,
    MuscleGain,
    Sleep,
    Hydration,
    Safety,
    Supplements,
}

/// Coarse grouping of topics, mirroring the sections of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicGroup {
    Conversation,
    MuscleGroups,
    Nutrition,
    Recovery,
}

impl Topic {
    pub fn group(self) -> TopicGroup {
        match self {
            Topic::Greeting | Topic::Farewell => TopicGroup::Conversation,
            Topic::Chest
            | Topic::Back
            | Topic::Legs
            | Topic::Arms
            | Topic::Core
            | Topic::Shoulders => TopicGroup::MuscleGroups,
            Topic::Nutrition
            | Topic::Protein
            | Topic::Carbs
            | Topic::Fats
            | Topic::FatLoss
            | Topic::MuscleGain => TopicGroup::Nutrition,
            Topic::Sleep | Topic::Hydration | Topic::Safety | Topic::Supplements => {
                TopicGroup::Recovery
            }
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Greeting => "greeting",
            Topic::Farewell => "farewell",
            Topic::Chest => "chest",
            Topic::Back => "back",
            Topic::Legs => "legs",
            Topic::Arms => "arms",
            Topic::Core => "core",
            Topic::Shoulders => "shoulders",
            Topic::Nutrition => "nutrition",
            Topic::Protein => "protein",
            Topic::Carbs => "carbs",
            Topic::Fats => "fats",
            Topic::FatLoss => "fat-loss",
            Topic::MuscleGain => "muscle-gain",
            Topic::Sleep => "sleep",
            Topic::Hydration => "hydration",
            Topic::Safety => "safety",
            Topic::Supplements => "supplements",
        };
        f.write_str(name)
    }
}

/// Serializable description of one trigger rule.
///
/// `keywords` are matched as lowercase substrings of the lowercased input;
/// any keyword matching fires the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub topic: Topic,
    pub keywords: Vec<String>,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_display_matches_serde() {
        for topic in [Topic::FatLoss, Topic::MuscleGain, Topic::Chest] {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{topic}\""));
        }
    }

    #[test]
    fn test_topic_groups() {
        assert_eq!(Topic::Greeting.group(), TopicGroup::Conversation);
        assert_eq!(Topic::Shoulders.group(), TopicGroup::MuscleGroups);
        assert_eq!(Topic::Protein.group(), TopicGroup::Nutrition);
        assert_eq!(Topic::Safety.group(), TopicGroup::Recovery);
    }

    #[test]
    fn test_rule_spec_from_toml() {
        let spec: RuleSpec = toml::from_str(
            r#"
topic = "hydration"
keywords = ["water", "electrolytes"]
response = "Drink up."
"#,
        )
        .unwrap();
        assert_eq!(spec.topic, Topic::Hydration);
        assert_eq!(spec.keywords.len(), 2);
    }
}
