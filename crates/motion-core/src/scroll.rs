use crate::constants::{HEADER_SCROLLED_THRESHOLD_PX, HERO_PARALLAX_FACTOR, SCROLL_TOP_THRESHOLD_PX};
use crate::signal::Signal;

/// Structural flags derived from the page scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub scroll_to_top: f64,
    pub header_scrolled: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scroll_to_top: SCROLL_TOP_THRESHOLD_PX,
            header_scrolled: HEADER_SCROLLED_THRESHOLD_PX,
            parallax_factor: HERO_PARALLAX_FACTOR,
        }
    }
}

impl ScrollThresholds {
    #[inline]
    pub fn show_scroll_to_top(&self, offset: f64) -> bool {
        offset > self.scroll_to_top
    }

    #[inline]
    pub fn header_is_scrolled(&self, offset: f64) -> bool {
        offset > self.header_scrolled
    }

    /// Vertical translation of the hero background, in px.
    #[inline]
    pub fn parallax_offset(&self, offset: f64) -> f64 {
        offset * self.parallax_factor
    }
}

/// Owner of the page scroll offset. Fed by one browser listener, read by any
/// number of subscribers.
#[derive(Clone)]
pub struct ScrollTracker {
    offset: Signal<f64>,
}

impl ScrollTracker {
    pub fn new(initial: f64) -> Self {
        Self {
            offset: Signal::new(sanitize(initial)),
        }
    }

    pub fn record(&self, offset: f64) {
        self.offset.set(sanitize(offset));
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    pub fn signal(&self) -> &Signal<f64> {
        &self.offset
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[inline]
fn sanitize(offset: f64) -> f64 {
    if offset.is_finite() {
        offset
    } else {
        0.0
    }
}
