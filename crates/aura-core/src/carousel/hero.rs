//! Hero expansion of the active card.
//!
//! Opening happens in two paints: first the overlay is placed exactly over
//! the card's captured rectangle with transitions disabled, then on the next
//! frame it is given the enlarged layout and allowed to animate. Closing
//! hides the overlay immediately and drops the inline style once the close
//! animation has had time to finish.

use std::time::{Duration, Instant};

use aura_types::exercise::ExerciseCard;
use aura_types::layout::{GridColumns, Length, Rect};

/// Corner radius applied while the overlay sits on the card.
pub const CARD_RADIUS: f64 = 24.0;

/// Inline style overrides on the hero card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStyle {
    pub top: Length,
    pub left: Length,
    pub width: Length,
    pub height: Length,
    pub border_radius: Option<f64>,
    pub columns: GridColumns,
    /// Whether changes to this style animate.
    pub transition: bool,
}

impl HeroStyle {
    /// Pinned to the card rectangle, no transition.
    pub fn snapshot(rect: Rect) -> Self {
        Self {
            top: Length::Px(rect.top),
            left: Length::Px(rect.left),
            width: Length::Px(rect.width),
            height: Length::Px(rect.height),
            border_radius: Some(CARD_RADIUS),
            columns: GridColumns::Single,
            transition: false,
        }
    }

    /// 10% inset, 80% size, 40/60 two-column body.
    pub fn expanded() -> Self {
        Self {
            top: Length::Percent(10.0),
            left: Length::Percent(10.0),
            width: Length::Percent(80.0),
            height: Length::Percent(80.0),
            border_radius: Some(CARD_RADIUS),
            columns: GridColumns::Split {
                left: 40.0,
                right: 60.0,
            },
            transition: true,
        }
    }

    /// Concrete rectangle inside `viewport`.
    pub fn resolve(&self, viewport: &Rect) -> Rect {
        Rect {
            left: viewport.left + self.left.resolve(viewport.width),
            top: viewport.top + self.top.resolve(viewport.height),
            width: self.width.resolve(viewport.width),
            height: self.height.resolve(viewport.height),
        }
    }
}

/// Text shown inside the hero, copied from the card on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub visual: String,
    pub badge: String,
    pub summary: String,
}

impl From<&ExerciseCard> for HeroContent {
    fn from(card: &ExerciseCard) -> Self {
        Self {
            title: card.title.clone(),
            visual: card.icon.clone(),
            badge: card.badge.clone(),
            summary: card.summary.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroPhase {
    /// No overlay, no inline overrides.
    Hidden,
    /// Overlay active, pinned to the captured rectangle.
    Snapshot,
    /// Overlay active, expanded layout applied.
    Expanded,
    /// Overlay removed, overrides pending removal.
    Closing { since: Instant },
}

#[derive(Debug, Clone)]
pub struct HeroExpander {
    phase: HeroPhase,
    origin: Option<Rect>,
    style: Option<HeroStyle>,
    content: Option<HeroContent>,
    close_duration: Duration,
}

impl HeroExpander {
    pub fn new(close_duration: Duration) -> Self {
        Self {
            phase: HeroPhase::Hidden,
            origin: None,
            style: None,
            content: None,
            close_duration,
        }
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    pub fn style(&self) -> Option<&HeroStyle> {
        self.style.as_ref()
    }

    pub fn content(&self) -> Option<&HeroContent> {
        self.content.as_ref()
    }

    /// Rectangle captured when the hero was opened.
    pub fn origin(&self) -> Option<Rect> {
        self.origin
    }

    pub fn is_overlay_active(&self) -> bool {
        matches!(self.phase, HeroPhase::Snapshot | HeroPhase::Expanded)
    }

    /// Capture `rect` and pin the overlay over it. Returns the first-paint style.
    pub fn open(&mut self, card: &ExerciseCard, rect: Rect) -> HeroStyle {
        let style = HeroStyle::snapshot(rect);
        self.origin = Some(rect);
        self.content = Some(HeroContent::from(card));
        self.style = Some(style);
        self.phase = HeroPhase::Snapshot;
        style
    }

    /// Apply the expanded layout after the snapshot has been painted.
    ///
    /// Returns `None` unless the hero is in the snapshot phase.
    pub fn next_frame(&mut self) -> Option<HeroStyle> {
        if self.phase != HeroPhase::Snapshot {
            return None;
        }
        let style = HeroStyle::expanded();
        self.style = Some(style);
        self.phase = HeroPhase::Expanded;
        Some(style)
    }

    /// Remove the overlay. Overrides stay until `tick` passes the close duration.
    pub fn close(&mut self, now: Instant) {
        if self.is_overlay_active() {
            self.phase = HeroPhase::Closing { since: now };
        }
    }

    /// Clear inline overrides once the close animation has elapsed.
    ///
    /// Returns true when the overrides were cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let HeroPhase::Closing { since } = self.phase {
            if now.saturating_duration_since(since) >= self.close_duration {
                self.phase = HeroPhase::Hidden;
                self.style = None;
                self.content = None;
                self.origin = None;
                return true;
            }
        }
        false
    }

    /// Progress of the close animation in `[0, 1]`.
    pub fn close_progress(&self, now: Instant) -> Option<f64> {
        match self.phase {
            HeroPhase::Closing { since } => {
                if self.close_duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(since).as_secs_f64();
                Some((elapsed / self.close_duration.as_secs_f64()).min(1.0))
            }
            _ => None,
        }
    }

    /// Overlay rectangle at `progress` through the current animation.
    ///
    /// Opening runs from the captured rectangle to the expanded layout;
    /// closing runs the other way. `None` when there is nothing to draw.
    pub fn frame_at(&self, progress: f64, viewport: &Rect) -> Option<Rect> {
        let origin = self.origin?;
        let target = HeroStyle::expanded().resolve(viewport);
        match self.phase {
            HeroPhase::Hidden => None,
            HeroPhase::Snapshot => Some(origin),
            HeroPhase::Expanded => Some(origin.lerp(&target, progress)),
            HeroPhase::Closing { .. } => Some(target.lerp(&origin, progress)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 500.0);

    fn card() -> ExerciseCard {
        ExerciseCard::new("planks", "Planks", "🧱", "Core", "Hold it.")
    }

    fn expander() -> HeroExpander {
        HeroExpander::new(Duration::from_millis(500))
    }

    #[test]
    fn test_open_pins_to_card_rect_without_transition() {
        let mut hero = expander();
        let rect = Rect::new(330.0, 120.0, 300.0, 400.0);
        let style = hero.open(&card(), rect);

        assert!(!style.transition);
        assert_eq!(style.columns, GridColumns::Single);
        assert_eq!(style.border_radius, Some(CARD_RADIUS));
        assert_eq!(style.resolve(&VIEWPORT), rect);
        assert!(hero.is_overlay_active());
        assert_eq!(hero.content().unwrap().title, "Planks");
        assert_eq!(hero.content().unwrap().visual, "🧱");
    }

    #[test]
    fn test_next_frame_expands() {
        let mut hero = expander();
        hero.open(&card(), Rect::new(330.0, 120.0, 300.0, 400.0));
        let style = hero.next_frame().unwrap();

        assert!(style.transition);
        assert_eq!(
            style.columns,
            GridColumns::Split {
                left: 40.0,
                right: 60.0
            }
        );
        assert_eq!(
            style.resolve(&VIEWPORT),
            Rect::new(100.0, 50.0, 800.0, 400.0)
        );
        assert_eq!(hero.phase(), HeroPhase::Expanded);
        // Only one expansion per open.
        assert!(hero.next_frame().is_none());
    }

    #[test]
    fn test_close_clears_overrides_after_duration() {
        let mut hero = expander();
        hero.open(&card(), Rect::new(0.0, 0.0, 10.0, 10.0));
        hero.next_frame();

        let t0 = Instant::now();
        hero.close(t0);
        assert!(!hero.is_overlay_active());
        assert!(hero.style().is_some());

        assert!(!hero.tick(t0 + Duration::from_millis(499)));
        assert!(hero.style().is_some());

        assert!(hero.tick(t0 + Duration::from_millis(500)));
        assert_eq!(hero.phase(), HeroPhase::Hidden);
        assert!(hero.style().is_none());
        assert!(hero.content().is_none());
        assert!(!hero.tick(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let mut hero = expander();
        hero.close(Instant::now());
        assert_eq!(hero.phase(), HeroPhase::Hidden);
    }

    #[test]
    fn test_frame_interpolation() {
        let mut hero = expander();
        let origin = Rect::new(300.0, 100.0, 300.0, 300.0);
        assert!(hero.frame_at(0.5, &VIEWPORT).is_none());

        hero.open(&card(), origin);
        assert_eq!(hero.frame_at(0.7, &VIEWPORT), Some(origin));

        hero.next_frame();
        let target = Rect::new(100.0, 50.0, 800.0, 400.0);
        assert_eq!(hero.frame_at(0.0, &VIEWPORT), Some(origin));
        assert_eq!(hero.frame_at(1.0, &VIEWPORT), Some(target));

        let t0 = Instant::now();
        hero.close(t0);
        assert_eq!(hero.frame_at(0.0, &VIEWPORT), Some(target));
        assert_eq!(hero.frame_at(1.0, &VIEWPORT), Some(origin));
        assert_eq!(hero.close_progress(t0 + Duration::from_millis(250)), Some(0.5));
    }
}
