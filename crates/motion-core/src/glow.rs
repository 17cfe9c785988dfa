//! Cursor-following glow.
//!
//! The glow trails the pointer: input events only overwrite the raw position,
//! and once per animation frame the displayed position covers a fixed fraction
//! of the remaining distance. The loop keeps easing after the pointer stops and
//! never terminates on its own; the owner cancels it on teardown.

use glam::Vec2;

use crate::constants::{GLOW_RADIUS_IDLE_PX, GLOW_RADIUS_PRESSED_PX, GLOW_SMOOTHING};
use crate::sink::{StyleValue, StyleVar};

/// One exponential-smoothing step: `current + (target - current) * k`.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    current + (target - current) * k
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowParams {
    pub smoothing: f32,
    pub radius_idle: f32,
    pub radius_pressed: f32,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            smoothing: GLOW_SMOOTHING,
            radius_idle: GLOW_RADIUS_IDLE_PX,
            radius_pressed: GLOW_RADIUS_PRESSED_PX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GlowTracker {
    params: GlowParams,
    raw: Vec2,
    smoothed: Vec2,
    inside: bool,
    pressed: bool,
}

impl GlowTracker {
    /// Starts at the origin, visible and released.
    pub fn new(params: GlowParams) -> Self {
        Self {
            params,
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            inside: true,
            pressed: false,
        }
    }

    /// Viewport coordinates; may lie outside the viewport at the window edge.
    pub fn record_move(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
    }

    pub fn advance_frame(&mut self) -> Vec2 {
        self.smoothed = ease_toward(self.smoothed, self.raw, self.params.smoothing);
        self.smoothed
    }

    /// Snaps the glow onto the pointer so it does not fly in from a stale spot.
    pub fn pointer_enter(&mut self) {
        self.smoothed = self.raw;
        self.inside = true;
    }

    pub fn pointer_leave(&mut self) {
        self.inside = false;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    pub fn is_visible(&self) -> bool {
        self.inside
    }

    pub fn radius(&self) -> f32 {
        if self.pressed {
            self.params.radius_pressed
        } else {
            self.params.radius_idle
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.inside {
            1.0
        } else {
            0.0
        }
    }

    /// Per-frame coordinates for the style sink.
    pub fn position_vars(&self) -> [(StyleVar, StyleValue); 2] {
        [
            (StyleVar::MouseX, StyleValue::Px(self.smoothed.x)),
            (StyleVar::MouseY, StyleValue::Px(self.smoothed.y)),
        ]
    }

    /// Radius and visibility; only change on press/release and enter/leave.
    pub fn appearance_vars(&self) -> [(StyleVar, StyleValue); 2] {
        [
            (StyleVar::GlowRadius, StyleValue::Px(self.radius())),
            (StyleVar::GlowOpacity, StyleValue::Number(self.opacity())),
        ]
    }
}

impl Default for GlowTracker {
    fn default() -> Self {
        Self::new(GlowParams::default())
    }
}
