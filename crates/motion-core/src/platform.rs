//! Platform graphic: concentric rounded rectangles drawn in sequence as the
//! pinned platform section is scrolled through.

use glam::DVec2;

use crate::constants::{
    DRAWING_END_PROGRESS, DRAWING_START_PROGRESS, PLATFORM_CORNER_RADIUS, PLATFORM_RINGS,
    PLATFORM_VIEW_H, PLATFORM_VIEW_W, TRACER_EDGE_EPSILON,
};
use crate::progress::window_progress;
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub r: f64,
}

impl RoundedRect {
    /// Centred in the platform view box.
    pub fn centered(w: f64, h: f64, r: f64) -> Self {
        Self {
            x: (PLATFORM_VIEW_W - w) / 2.0,
            y: (PLATFORM_VIEW_H - h) / 2.0,
            w,
            h,
            r,
        }
    }

    /// Nominal perimeter used for the stroke dash pattern: `2(w + h)`.
    ///
    /// It overestimates the outline by the rounded corners, so a dash offset
    /// of this length hides the whole outline.
    pub fn dash_length(&self) -> f64 {
        2.0 * (self.w + self.h)
    }

    /// Exact length of the outline.
    pub fn outline_length(&self) -> f64 {
        2.0 * (self.w + self.h) - 8.0 * self.r + 2.0 * PI * self.r
    }

    /// SVG path, clockwise from the top edge just right of the top-left corner.
    pub fn path_d(&self) -> String {
        let RoundedRect { x, y, w, h, r } = *self;
        format!(
            "M{},{} H{} A{r},{r} 0 0 1 {},{} V{} A{r},{r} 0 0 1 {},{} H{} A{r},{r} 0 0 1 {},{} V{} A{r},{r} 0 0 1 {},{} Z",
            x + r, y,
            x + w - r,
            x + w, y + r,
            y + h - r,
            x + w - r, y + h,
            x + r,
            x, y + h - r,
            y + r,
            x + r, y,
        )
    }

    /// Point `len` units along the outline, following [`Self::path_d`].
    /// Lengths are clamped to the outline.
    pub fn point_at_length(&self, len: f64) -> DVec2 {
        let RoundedRect { x, y, w, h, r } = *self;
        let straight_h = w - 2.0 * r;
        let straight_v = h - 2.0 * r;
        let arc = FRAC_PI_2 * r;
        let mut s = len.clamp(0.0, self.outline_length());

        let lengths = [straight_h, arc, straight_v, arc, straight_h, arc, straight_v, arc];
        let mut seg = 0;
        while seg < lengths.len() - 1 && s > lengths[seg] {
            s -= lengths[seg];
            seg += 1;
        }

        let corner = |cx: f64, cy: f64, start_angle: f64| {
            let a = start_angle + if r > 0.0 { s / r } else { 0.0 };
            DVec2::new(cx + r * a.cos(), cy + r * a.sin())
        };
        match seg {
            0 => DVec2::new(x + r + s, y),
            1 => corner(x + w - r, y + r, -FRAC_PI_2),
            2 => DVec2::new(x + w, y + r + s),
            3 => corner(x + w - r, y + h - r, 0.0),
            4 => DVec2::new(x + w - r - s, y + h),
            5 => corner(x + r, y + h - r, FRAC_PI_2),
            6 => DVec2::new(x, y + h - r - s),
            _ => corner(x + r, y + r, PI),
        }
    }
}

/// Drawing state of one ring for a given drawing progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingFrame {
    pub progress: f64,
    pub dash_offset: f64,
    /// Tracer dot position, `None` while hidden at either end of the ring.
    pub tracer: Option<DVec2>,
}

/// State of the whole graphic for one section-progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformFrame {
    pub drawing_progress: f64,
    pub rings: Vec<RingFrame>,
}

impl PlatformFrame {
    /// Caption and glow are revealed once every ring is drawn.
    pub fn is_drawn(&self) -> bool {
        self.drawing_progress >= 1.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformGraphic {
    rings: Vec<RoundedRect>,
    drawing_start: f64,
    drawing_end: f64,
}

impl PlatformGraphic {
    pub fn new(rings: Vec<RoundedRect>, drawing_start: f64, drawing_end: f64) -> Self {
        Self {
            rings,
            drawing_start,
            drawing_end,
        }
    }

    pub fn with_drawing_window(mut self, start: f64, end: f64) -> Self {
        self.drawing_start = start;
        self.drawing_end = end;
        self
    }

    pub fn rings(&self) -> &[RoundedRect] {
        &self.rings
    }

    pub fn drawing_progress(&self, section_progress: f64) -> f64 {
        window_progress(section_progress, self.drawing_start, self.drawing_end)
    }

    /// Ring `i` of `n` owns the sub-range `[i/n, (i+1)/n]` of drawing progress.
    pub fn ring_progress(&self, index: usize, drawing: f64) -> f64 {
        let n = self.rings.len().max(1) as f64;
        let start = index as f64 / n;
        let end = (index + 1) as f64 / n;
        window_progress(drawing, start, end)
    }

    pub fn frame(&self, section_progress: f64) -> PlatformFrame {
        let drawing = self.drawing_progress(section_progress);
        let rings = self
            .rings
            .iter()
            .enumerate()
            .map(|(i, rect)| {
                let p = self.ring_progress(i, drawing);
                let dash = rect.dash_length();
                let tracer = if p <= TRACER_EDGE_EPSILON || p >= 1.0 - TRACER_EDGE_EPSILON {
                    None
                } else {
                    Some(rect.point_at_length(p * dash))
                };
                RingFrame {
                    progress: p,
                    dash_offset: dash * (1.0 - p),
                    tracer,
                }
            })
            .collect();
        PlatformFrame {
            drawing_progress: drawing,
            rings,
        }
    }
}

impl Default for PlatformGraphic {
    fn default() -> Self {
        let rings = PLATFORM_RINGS
            .iter()
            .map(|[w, h]| RoundedRect::centered(*w, *h, PLATFORM_CORNER_RADIUS))
            .collect();
        Self::new(rings, DRAWING_START_PROGRESS, DRAWING_END_PROGRESS)
    }
}
