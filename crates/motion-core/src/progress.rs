//! Scroll progress through tracked sections.

/// Bounding geometry of a section relative to the viewport, read fresh on
/// every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    /// Distance from the viewport top; negative once scrolled past.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    /// Scroll range consumed while the section is pinned.
    #[inline]
    pub fn scroll_distance(&self) -> f64 {
        self.height - self.viewport_height
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Replace NaN/infinite values with 0 before they reach a style value.
#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// How far through a pinned section's scroll range the user is, in `[0, 1]`.
///
/// A section no taller than the viewport has no range: it reads 1 once its
/// top reaches the viewport top and 0 before.
pub fn section_progress(g: SectionGeometry) -> f64 {
    let distance = g.scroll_distance();
    if distance <= 0.0 {
        return if g.top <= 0.0 { 1.0 } else { 0.0 };
    }
    let p = (-g.top / distance).clamp(0.0, 1.0);
    finite_or_zero(p)
}

/// Re-map `p` so that `[start, end]` spans `[0, 1]`, clamped.
pub fn window_progress(p: f64, start: f64, end: f64) -> f64 {
    finite_or_zero(((p - start) / (end - start)).clamp(0.0, 1.0))
}
