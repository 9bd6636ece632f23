//! Layout primitives shared by the carousel/hero logic and the terminal UI.
//!
//! Units are abstract: the terminal browser feeds cell coordinates, tests use
//! pixel-like numbers. Nothing here assumes a particular backend.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Linear interpolation between two rectangles, `t` clamped to `[0, 1]`.
    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rect {
            left: mix(self.left, to.left),
            top: mix(self.top, to.top),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
        }
    }
}

/// A length that is either absolute or relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolve against the size of the containing axis.
    pub fn resolve(self, container: f64) -> f64 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => container * p / 100.0,
        }
    }
}

/// Column template of the hero card body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GridColumns {
    /// One column (collapsed card).
    Single,
    /// Two columns, widths in percent.
    Split { left: f64, right: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_resolve() {
        assert_eq!(Length::Px(24.0).resolve(1000.0), 24.0);
        assert_eq!(Length::Percent(10.0).resolve(1000.0), 100.0);
        assert_eq!(Length::Percent(80.0).resolve(50.0), 40.0);
    }

    #[test]
    fn test_rect_lerp_endpoints_and_midpoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 20.0, 30.0, 50.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Rect::new(5.0, 10.0, 20.0, 30.0));
        assert_eq!(a.lerp(&b, 7.0), b);
    }
}
