//! Presentation-variable store.
//!
//! Continuous style parameters (glow coordinates, themed colours) bypass
//! structural re-rendering and are written into a small named store that
//! visual consumers read at paint time. In the browser that store is the set
//! of CSS custom properties on the root element; on the host it is
//! [`PresentationVars`].
//!
//! Every variable has exactly one owning [`Writer`]. Batches are published
//! through [`publish`], which rejects the whole batch if any entry belongs to
//! another writer, so two drivers never contend for the same name.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::MotionError;

/// Components allowed to write presentation variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Writer {
    Glow,
    Palette,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleVar {
    MouseX,
    MouseY,
    GlowRadius,
    GlowOpacity,
    MainBgRgb,
    MainTextRgb,
    MutedTextRgb,
    AccentTextRgb,
    CardBgRgb,
    CardBgAlpha,
    CardBorderRgb,
    MouseGlowRgb,
}

impl StyleVar {
    pub const ALL: [StyleVar; 12] = [
        StyleVar::MouseX,
        StyleVar::MouseY,
        StyleVar::GlowRadius,
        StyleVar::GlowOpacity,
        StyleVar::MainBgRgb,
        StyleVar::MainTextRgb,
        StyleVar::MutedTextRgb,
        StyleVar::AccentTextRgb,
        StyleVar::CardBgRgb,
        StyleVar::CardBgAlpha,
        StyleVar::CardBorderRgb,
        StyleVar::MouseGlowRgb,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            StyleVar::MouseX => "--mouse-x",
            StyleVar::MouseY => "--mouse-y",
            StyleVar::GlowRadius => "--glow-radius",
            StyleVar::GlowOpacity => "--glow-opacity",
            StyleVar::MainBgRgb => "--main-bg-rgb",
            StyleVar::MainTextRgb => "--main-text-rgb",
            StyleVar::MutedTextRgb => "--muted-text-rgb",
            StyleVar::AccentTextRgb => "--accent-text-rgb",
            StyleVar::CardBgRgb => "--card-bg-rgb",
            StyleVar::CardBgAlpha => "--card-bg-alpha",
            StyleVar::CardBorderRgb => "--card-border-rgb",
            StyleVar::MouseGlowRgb => "--mouse-glow-rgb",
        }
    }

    pub fn owner(self) -> Writer {
        match self {
            StyleVar::MouseX | StyleVar::MouseY | StyleVar::GlowRadius | StyleVar::GlowOpacity => {
                Writer::Glow
            }
            _ => Writer::Palette,
        }
    }
}

/// A typed presentation value. `Display` renders the CSS text form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    Px(f32),
    /// Grey colour written as an `r, g, b` triple for `rgb(var(..))` consumers.
    Grey(u8),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StyleValue::Px(v) => write!(f, "{}px", v),
            StyleValue::Grey(c) => write!(f, "{c}, {c}, {c}"),
            StyleValue::Number(v) => write!(f, "{}", v),
        }
    }
}

/// Destination for presentation variables.
pub trait StyleSink {
    fn set(&mut self, var: StyleVar, value: StyleValue);
}

/// Write a batch on behalf of `writer`.
///
/// Ownership of every entry is checked before the first write, so a rejected
/// batch leaves the sink untouched.
pub fn publish<S: StyleSink + ?Sized>(
    sink: &mut S,
    writer: Writer,
    entries: &[(StyleVar, StyleValue)],
) -> Result<(), MotionError> {
    if let Some((var, _)) = entries.iter().find(|(var, _)| var.owner() != writer) {
        let err = MotionError::ForeignWrite {
            writer,
            var: *var,
            owner: var.owner(),
        };
        log::warn!("rejected style batch: {}", err);
        return Err(err);
    }
    for (var, value) in entries {
        sink.set(*var, *value);
    }
    Ok(())
}

/// In-memory sink; the host-side stand-in for the root element's style.
#[derive(Clone, Debug, Default)]
pub struct PresentationVars {
    values: BTreeMap<StyleVar, StyleValue>,
    writes: usize,
}

impl PresentationVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: StyleVar) -> Option<StyleValue> {
        self.values.get(&var).copied()
    }

    pub fn css_text(&self, var: StyleVar) -> Option<String> {
        self.get(var).map(|v| v.to_string())
    }

    /// Total number of individual writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StyleSink for PresentationVars {
    fn set(&mut self, var: StyleVar, value: StyleValue) {
        self.values.insert(var, value);
        self.writes += 1;
    }
}
