//! One-shot reveal of content sections as they scroll into view.

use crate::constants::REVEAL_VISIBLE_FRACTION;
use crate::progress::{finite_or_zero, SectionGeometry};

/// Share of a section inside the viewport, in `[0, 1]`.
///
/// Measured against the smaller of the section and the viewport, so a section
/// taller than the screen reads 1 while it fills it.
pub fn visible_fraction(g: SectionGeometry) -> f64 {
    let finite = g.top.is_finite() && g.height.is_finite() && g.viewport_height.is_finite();
    if !finite || g.viewport_height <= 0.0 {
        return 0.0;
    }
    let basis = g.height.min(g.viewport_height);
    if !(basis > 0.0) {
        return 0.0;
    }
    let overlap = (g.top + g.height).min(g.viewport_height) - g.top.max(0.0);
    finite_or_zero((overlap / basis).clamp(0.0, 1.0))
}

#[inline]
pub fn is_on_screen(g: SectionGeometry, min_fraction: f64) -> bool {
    let f = visible_fraction(g);
    f > 0.0 && f >= min_fraction
}

/// Flips once when its section first comes on screen and stays revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    min_fraction: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_VISIBLE_FRACTION)
    }
}

impl RevealLatch {
    pub fn new(min_fraction: f64) -> Self {
        Self {
            min_fraction,
            revealed: false,
        }
    }

    /// True only on the tick the section is first seen.
    pub fn observe(&mut self, g: SectionGeometry) -> bool {
        if self.revealed || !is_on_screen(g, self.min_fraction) {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
