//! Scroll-linked theme recolouring.
//!
//! The reference section's distance from the viewport centre drives a
//! dark→light blend of every themed surface. Outputs are pure functions of
//! the geometry, so replaying a scroll position replays the colours.

use crate::progress::{finite_or_zero, SectionGeometry};
use crate::sink::{StyleValue, StyleVar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelKind {
    /// Grey level, rounded to the nearest integer.
    Grey,
    /// Opacity-like value, left fractional.
    Alpha,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorChannel {
    pub var: StyleVar,
    pub start: f64,
    pub end: f64,
    pub kind: ChannelKind,
}

impl ColorChannel {
    const fn grey(var: StyleVar, start: u8, end: u8) -> Self {
        Self {
            var,
            start: start as f64,
            end: end as f64,
            kind: ChannelKind::Grey,
        }
    }

    pub fn value_at(&self, eased: f64) -> StyleValue {
        let v = lerp(self.start, self.end, eased);
        match self.kind {
            ChannelKind::Grey => StyleValue::Grey(v.round().clamp(0.0, 255.0) as u8),
            ChannelKind::Alpha => StyleValue::Number(v),
        }
    }
}

/// Dark (section far from centre) to light (section centred).
pub const THEME_CHANNELS: [ColorChannel; 8] = [
    ColorChannel::grey(StyleVar::MainBgRgb, 13, 255),
    ColorChannel::grey(StyleVar::MainTextRgb, 229, 25),
    ColorChannel::grey(StyleVar::MutedTextRgb, 163, 115),
    ColorChannel::grey(StyleVar::AccentTextRgb, 96, 50),
    ColorChannel::grey(StyleVar::CardBgRgb, 38, 229),
    ColorChannel {
        var: StyleVar::CardBgAlpha,
        start: 0.5,
        end: 0.0,
        kind: ChannelKind::Alpha,
    },
    ColorChannel::grey(StyleVar::CardBorderRgb, 38, 229),
    ColorChannel::grey(StyleVar::MouseGlowRgb, 255, 0),
];

#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// `t² (3 - 2t)`: zero slope at both ends, fixed points at 0, 0.5 and 1.
#[inline]
pub fn smoother_step(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// 1 when the section is centred in the viewport, falling linearly to 0 one
/// viewport height away.
pub fn centering_progress(g: SectionGeometry) -> f64 {
    let distance = (g.viewport_height / 2.0 - g.center_y()).abs();
    let p = (1.0 - distance / g.viewport_height).clamp(0.0, 1.0);
    finite_or_zero(p)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    channels: Vec<ColorChannel>,
}

impl Palette {
    pub fn new(channels: Vec<ColorChannel>) -> Self {
        Self { channels }
    }

    pub fn at_eased(&self, eased: f64) -> Vec<(StyleVar, StyleValue)> {
        self.channels
            .iter()
            .map(|c| (c.var, c.value_at(eased)))
            .collect()
    }

    /// Full recomputation for one tick.
    pub fn evaluate(&self, g: SectionGeometry) -> Vec<(StyleVar, StyleValue)> {
        self.at_eased(smoother_step(centering_progress(g)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(THEME_CHANNELS.to_vec())
    }
}
