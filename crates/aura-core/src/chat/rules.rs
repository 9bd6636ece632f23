//! Ordered keyword trigger rules.
//!
//! A `RuleSet` is evaluated top to bottom against the lowercased input and
//! the first rule with a matching keyword wins. Keywords match anywhere in
//! the input, including inside longer words ("hi" fires on "this"), so the
//! order of the table is the only overlap resolution.

use aura_types::error::RuleError;
use aura_types::rule::{RuleSpec, Topic};

/// A single keyword-to-response mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerRule {
    topic: Topic,
    keywords: Vec<String>,
    response: String,
}

impl TriggerRule {
    /// Build a rule, lowercasing its keywords.
    ///
    /// Fails if there are no keywords or any keyword is blank (a blank
    /// keyword would match every input).
    pub fn new(
        topic: Topic,
        keywords: &[impl AsRef<str>],
        response: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Self::build(0, topic, keywords, response.into())
    }

    fn build(
        index: usize,
        topic: Topic,
        keywords: &[impl AsRef<str>],
        response: String,
    ) -> Result<Self, RuleError> {
        if keywords.is_empty() {
            return Err(RuleError::EmptyTrigger {
                index,
                topic: topic.to_string(),
            });
        }

        let mut lowered = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.as_ref();
            if keyword.trim().is_empty() {
                return Err(RuleError::InvalidTrigger {
                    index,
                    reason: "blank keyword".to_string(),
                });
            }
            lowered.push(keyword.to_lowercase());
        }

        Ok(Self {
            topic,
            keywords: lowered,
            response,
        })
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Whether any keyword occurs in `lowered` (already lowercased input).
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// An ordered rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<TriggerRule>,
}

impl RuleSet {
    /// The built-in fitness/nutrition/recovery table.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(topic, keywords, response)| TriggerRule {
                topic: *topic,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                response: response.to_string(),
            })
            .collect();
        Self { rules }
    }

    /// Build a table from configuration, preserving order.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self, RuleError> {
        let rules = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                TriggerRule::build(index, spec.topic, &spec.keywords, spec.response.clone())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Configured rules when present, otherwise the built-in table.
    pub fn from_config(specs: &[RuleSpec]) -> Result<Self, RuleError> {
        if specs.is_empty() {
            Ok(Self::builtin())
        } else {
            Self::from_specs(specs)
        }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    /// Append a rule at the lowest priority.
    pub fn push(&mut self, rule: TriggerRule) {
        self.rules.push(rule);
    }

    /// First rule whose trigger fires on `input`.
    pub fn first_match(&self, input: &str) -> Option<&TriggerRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

type BuiltinRule = (Topic, &'static [&'static str], &'static str);

const BUILTIN_RULES: &[BuiltinRule] = &[
    // Conversation
    (
        Topic::Greeting,
        &["hi", "hello", "hey", "start"],
        "Ready to train. What's your target today?",
    ),
    (Topic::Farewell, &["bye", "exit", "quit"], "Session saved. Rest up!"),
    // Muscle groups
    (
        Topic::Chest,
        &["chest", "pecs", "push"],
        "For **Chest**, focus on: <br>1. Bench Press (Strength)<br>2. Incline Dumbbell Press (Upper Chest)<br>3. Cable Flys (Isolation)<br>Keep shoulders retracted!",
    ),
    (
        Topic::Back,
        &["back", "lats", "pull"],
        "For a wide **Back**: <br>1. Pull-ups (Width)<br>2. Barbell Rows (Thickness)<br>3. Lat Pulldowns.<br>Focus on driving elbows down.",
    ),
    (
        Topic::Legs,
        &["leg", "squat", "quad", "hamstring"],
        "Don't skip **Leg Day**: <br>1. Squats (King of exercises)<br>2. Romanian Deadlifts (Hamstrings)<br>3. Leg Press.<br>Keep your core braced!",
    ),
    (
        Topic::Arms,
        &["arm", "bicep", "tricep"],
        "**Arms** Routine: <br>• Biceps: Barbell Curls & Hammer Curls.<br>• Triceps: Dips & Rope Pushdowns.<br>Control the eccentric (lowering) phase.",
    ),
    (
        Topic::Core,
        &["abs", "core", "belly"],
        "**Core** stability is key. Try Planks (3x 60s), Hanging Leg Raises, and Cable Woodchoppers. Remember: Abs are revealed in the kitchen.",
    ),
    (
        Topic::Shoulders,
        &["shoulder", "delts"],
        "**Shoulder** builder: <br>1. Overhead Press (Mass)<br>2. Lateral Raises (Width)<br>3. Face Pulls (Rear Delts/Health).",
    ),
    // Nutrition
    (
        Topic::Nutrition,
        &["diet", "food", "eat", "nutrition"],
        "Nutrition rule of thumb: Eat whole foods. 80% clean, 20% flexibility. Prioritize protein in every meal.",
    ),
    (
        Topic::Protein,
        &["protein", "shake", "whey"],
        "**Protein** builds muscle. Aim for 1.6g to 2.2g per kg of bodyweight. Good sources: Chicken, Fish, Eggs, Whey, Lentils.",
    ),
    (
        Topic::Carbs,
        &["carb", "energy", "sugar"],
        "**Carbs** are fuel. Eat complex carbs (oats, rice, potatoes) around your workout window for maximum energy.",
    ),
    (
        Topic::Fats,
        &["fat", "keto"],
        "Healthy **Fats** regulate hormones. Include avocado, nuts, olive oil, and salmon in your diet.",
    ),
    (
        Topic::FatLoss,
        &["weight loss", "fat loss", "cut"],
        "To **lose fat**: Caloric Deficit is required. Eat 300-500 calories below maintenance. High protein helps retain muscle while cutting.",
    ),
    (
        Topic::MuscleGain,
        &["gain", "bulk", "muscle"],
        "To **build muscle**: Caloric Surplus. Eat 200-300 calories above maintenance. Focus on progressive overload in the gym.",
    ),
    // Recovery & health
    (
        Topic::Sleep,
        &["sleep", "rest", "insomnia"],
        "Sleep is when you grow. Aim for **7-9 hours**. Keep your room cool and dark for better quality.",
    ),
    (
        Topic::Hydration,
        &["water", "hydrate", "drink"],
        "**Hydration** affects strength. Drink 3-4 liters daily. If your urine is dark, drink more immediately.",
    ),
    (
        Topic::Safety,
        &["sore", "pain", "hurt", "injury"],
        "⚠️ **Safety First**: If it's sharp pain, stop. If it's general soreness (DOMS), keep moving lightly and eat protein. Stretching helps.",
    ),
    (
        Topic::Supplements,
        &["creatine", "supplements"],
        "**Creatine Monohydrate** (5g/day) is the most researched supplement for power. Multivitamins and Fish Oil are also good basics.",
    ),
];
