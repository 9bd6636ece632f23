//! Exercise cards shown in the carousel.

use serde::{Deserialize, Serialize};

/// One card in the exercise carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCard {
    /// Stable identifier (e.g., "squats").
    pub slug: String,
    /// Display title shown on the card and in the hero header.
    pub title: String,
    /// Single glyph rendered as the card visual.
    pub icon: String,
    /// Short label, usually the targeted muscle group.
    pub badge: String,
    /// One-line description shown in the expanded hero view.
    pub summary: String,
}

impl ExerciseCard {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        badge: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            icon: icon.into(),
            badge: badge.into(),
            summary: summary.into(),
        }
    }
}
