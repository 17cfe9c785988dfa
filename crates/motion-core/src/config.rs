//! Engine configuration.
//!
//! Defaults come from `constants.rs`; the web front-end builds one at start-up
//! and validates it before attaching anything.

use crate::constants::*;
use crate::error::MotionError;
use crate::glow::GlowParams;
use crate::scroll::ScrollThresholds;

/// DOM ids of the elements each effect drives.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetIds {
    pub glow: String,
    pub header: String,
    pub hero_grid: String,
    pub scroll_to_top: String,
    pub features_section: String,
    pub work_section: String,
    pub work_graphic: String,
    pub platform_section: String,
    pub platform_graphic: String,
    pub platform_features: String,
    pub platform_ring_prefix: String,
    pub platform_tracer_prefix: String,
    /// Sections whose content blocks reveal when first on screen.
    pub reveal_sections: Vec<String>,
}

impl Default for TargetIds {
    fn default() -> Self {
        Self {
            glow: GLOW_ELEMENT_ID.to_string(),
            header: HEADER_ELEMENT_ID.to_string(),
            hero_grid: HERO_GRID_ELEMENT_ID.to_string(),
            scroll_to_top: SCROLL_TOP_ELEMENT_ID.to_string(),
            features_section: FEATURES_SECTION_ID.to_string(),
            work_section: WORK_SECTION_ID.to_string(),
            work_graphic: WORK_GRAPHIC_ID.to_string(),
            platform_section: PLATFORM_SECTION_ID.to_string(),
            platform_graphic: PLATFORM_GRAPHIC_ID.to_string(),
            platform_features: PLATFORM_FEATURES_ID.to_string(),
            platform_ring_prefix: PLATFORM_RING_ID_PREFIX.to_string(),
            platform_tracer_prefix: PLATFORM_TRACER_ID_PREFIX.to_string(),
            reveal_sections: REVEAL_SECTION_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl TargetIds {
    pub fn platform_ring(&self, index: usize) -> String {
        format!("{}{}", self.platform_ring_prefix, index)
    }

    pub fn platform_tracer(&self, index: usize) -> String {
        format!("{}{}", self.platform_tracer_prefix, index)
    }

    /// Override one target by its kebab-case name, e.g. `"hero-grid"`.
    pub fn set(&mut self, name: &str, id: &str) -> Result<(), MotionError> {
        let slot = match name {
            "glow" => &mut self.glow,
            "header" => &mut self.header,
            "hero-grid" => &mut self.hero_grid,
            "scroll-to-top" => &mut self.scroll_to_top,
            "features" => &mut self.features_section,
            "work" => &mut self.work_section,
            "work-graphic" => &mut self.work_graphic,
            "platform" => &mut self.platform_section,
            "platform-graphic" => &mut self.platform_graphic,
            "platform-features" => &mut self.platform_features,
            "platform-ring-prefix" => &mut self.platform_ring_prefix,
            "platform-tracer-prefix" => &mut self.platform_tracer_prefix,
            _ => return Err(MotionError::UnknownTarget(name.to_string())),
        };
        if id.trim().is_empty() {
            return Err(MotionError::EmptyTargetId(name.to_string()));
        }
        *slot = id.to_string();
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub glow: GlowParams,
    pub scroll: ScrollThresholds,
    pub drawing_start: f64,
    pub drawing_end: f64,
    pub reveal_fraction: f64,
    pub targets: TargetIds,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            glow: GlowParams::default(),
            scroll: ScrollThresholds::default(),
            drawing_start: DRAWING_START_PROGRESS,
            drawing_end: DRAWING_END_PROGRESS,
            reveal_fraction: REVEAL_VISIBLE_FRACTION,
            targets: TargetIds::default(),
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), MotionError> {
        let k = self.glow.smoothing;
        if !(k > 0.0 && k < 1.0) {
            return Err(MotionError::InvalidSmoothing(k));
        }
        for r in [self.glow.radius_idle, self.glow.radius_pressed] {
            if !(r > 0.0 && r.is_finite()) {
                return Err(MotionError::InvalidRadius(r));
            }
        }
        let thresholds = [
            ("scroll-to-top", self.scroll.scroll_to_top),
            ("header", self.scroll.header_scrolled),
            ("parallax", self.scroll.parallax_factor),
        ];
        for (name, value) in thresholds {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(MotionError::InvalidThreshold { name, value });
            }
        }
        if !(self.reveal_fraction > 0.0 && self.reveal_fraction <= 1.0) {
            return Err(MotionError::InvalidRevealFraction(self.reveal_fraction));
        }
        if !(self.drawing_end > self.drawing_start) {
            return Err(MotionError::EmptyDrawingWindow {
                start: self.drawing_start,
                end: self.drawing_end,
            });
        }
        Ok(())
    }
}
