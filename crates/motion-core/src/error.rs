use thiserror::Error;

use crate::sink::{StyleVar, Writer};

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("glow smoothing factor must be in (0, 1), got {0}")]
    InvalidSmoothing(f32),
    #[error("glow radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("{name} threshold must be finite and non-negative, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("reveal fraction must be in (0, 1], got {0}")]
    InvalidRevealFraction(f64),
    #[error("unknown effect target {0:?}")]
    UnknownTarget(String),
    #[error("target {0:?} needs a non-empty element id")]
    EmptyTargetId(String),
    #[error("drawing window [{start}, {end}] is empty")]
    EmptyDrawingWindow { start: f64, end: f64 },
    #[error("{writer:?} may not write {var:?}; it is owned by {owner:?}")]
    ForeignWrite {
        writer: Writer,
        var: StyleVar,
        owner: Writer,
    },
}
