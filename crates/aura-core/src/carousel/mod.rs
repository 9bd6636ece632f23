//! Exercise carousel state.
//!
//! A carousel is a fixed list of cards with one active card. Navigation is
//! clamped (no wraparound), and the track offset centers the active card in
//! its container.

pub mod catalog;
pub mod hero;

use aura_types::exercise::ExerciseCard;

/// Visual state of one card. Exactly one card is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Active,
    Inactive,
}

/// Result of selecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The already-active card was selected: open the hero view on it.
    Expand(usize),
    /// Another card was selected and became active.
    Moved(usize),
    /// Index out of range; nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    cards: Vec<ExerciseCard>,
    index: usize,
    card_width: f64,
}

impl Carousel {
    /// Build a carousel starting at the first card.
    ///
    /// Returns `None` for an empty card list.
    pub fn new(cards: Vec<ExerciseCard>, card_width: f64) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            cards,
            index: 0,
            card_width,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[ExerciseCard] {
        &self.cards
    }

    pub fn card_width(&self) -> f64 {
        self.card_width
    }

    /// The active card.
    pub fn current(&self) -> &ExerciseCard {
        &self.cards[self.index]
    }

    /// Move one card forward. Returns false at the last card.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move one card back. Returns false at the first card.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Select card `i`.
    pub fn select(&mut self, i: usize) -> Selection {
        if i >= self.cards.len() {
            Selection::Ignored
        } else if i == self.index {
            Selection::Expand(i)
        } else {
            self.index = i;
            Selection::Moved(i)
        }
    }

    /// Horizontal track translation that centers the active card.
    pub fn offset(&self, container_width: f64) -> f64 {
        -(self.index as f64 * self.card_width) + container_width / 2.0 - self.card_width / 2.0
    }

    pub fn state_of(&self, i: usize) -> CardState {
        if i == self.index {
            CardState::Active
        } else {
            CardState::Inactive
        }
    }

    /// Per-card states in display order.
    pub fn card_states(&self) -> Vec<CardState> {
        (0..self.cards.len()).map(|i| self.state_of(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        let cards = (0..n)
            .map(|i| ExerciseCard::new(format!("c{i}"), format!("Card {i}"), "*", "Core", ""))
            .collect();
        Carousel::new(cards, 340.0).unwrap()
    }

    #[test]
    fn test_empty_carousel_is_not_built() {
        assert!(Carousel::new(Vec::new(), 340.0).is_none());
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut c = carousel(3);
        for _ in 0..10 {
            c.previous();
            assert_eq!(c.index(), 0);
        }
        for _ in 0..10 {
            c.next();
            assert!(c.index() <= 2);
        }
        assert_eq!(c.index(), 2);
        assert!(!c.next());
        assert!(c.previous());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_single_card_never_moves() {
        let mut c = carousel(1);
        assert!(!c.next());
        assert!(!c.previous());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_select_other_card_moves_without_expanding() {
        let mut c = carousel(4);
        assert_eq!(c.select(2), Selection::Moved(2));
        assert_eq!(c.index(), 2);
        assert_eq!(c.select(2), Selection::Expand(2));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut c = carousel(2);
        assert_eq!(c.select(5), Selection::Ignored);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_offset_centers_active_card() {
        let mut c = carousel(5);
        // index 0: 0 + 500 - 170
        assert_eq!(c.offset(1000.0), 330.0);
        c.next();
        c.next();
        // index 2: -680 + 500 - 170
        assert_eq!(c.offset(1000.0), -350.0);
    }

    #[test]
    fn test_exactly_one_active_card() {
        let mut c = carousel(4);
        c.select(3);
        let states = c.card_states();
        assert_eq!(states.iter().filter(|s| **s == CardState::Active).count(), 1);
        assert_eq!(states[3], CardState::Active);
        assert_eq!(c.state_of(0), CardState::Inactive);
        assert_eq!(c.current().slug, "c3");
    }
}
