use glam::Vec2;

use crate::constants::TILT_MAX_DEG;

/// Pointer position relative to a section's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionPointer {
    /// Pixels from the section's top-left corner.
    pub local: Vec2,
    /// `(local / size - 0.5) * 2`: `-1..1` inside the section, centre at 0.
    pub normalized: Vec2,
}

impl SectionPointer {
    /// `None` for a zero-sized or not-yet-laid-out section.
    pub fn from_client(
        client_x: f32,
        client_y: f32,
        rect_left: f32,
        rect_top: f32,
        rect_width: f32,
        rect_height: f32,
    ) -> Option<Self> {
        if !(rect_width > 0.0 && rect_height > 0.0) {
            return None;
        }
        let local = Vec2::new(client_x - rect_left, client_y - rect_top);
        let size = Vec2::new(rect_width, rect_height);
        let normalized = (local / size - Vec2::splat(0.5)) * 2.0;
        if !normalized.is_finite() {
            return None;
        }
        Some(Self { local, normalized })
    }

    /// `(rotateY, rotateX)` in degrees for the showcase graphic.
    pub fn tilt_deg(&self) -> (f32, f32) {
        (
            self.normalized.x * TILT_MAX_DEG,
            -self.normalized.y * TILT_MAX_DEG,
        )
    }

    pub fn transform_css(&self) -> String {
        let (ry, rx) = self.tilt_deg();
        format!("rotateY({}deg) rotateX({}deg)", ry, rx)
    }
}
