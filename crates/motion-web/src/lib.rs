#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use motion_core::{MotionConfig, PlatformGraphic};
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod listener;
mod palette;
mod platform;
mod reveal;
mod showcase;

use events::{GlowWiring, ScrollWiring};
use palette::PaletteDriver;
use platform::PlatformDriver;
use reveal::RevealDriver;
use showcase::ShowcaseTilt;

/// Everything attached for one mounted page. Each part detaches itself on
/// drop, independently of the others.
struct Mounted {
    scroll: ScrollWiring,
    _glow: GlowWiring,
    _palette: Option<PaletteDriver>,
    _platform: Option<PlatformDriver>,
    _reveal: Option<RevealDriver>,
    _showcase: Option<ShowcaseTilt>,
}

fn attach(config: &MotionConfig) -> anyhow::Result<Mounted> {
    config.validate()?;
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let targets = &config.targets;

    let glow = events::wire_glow(&document, config.glow, &targets.glow)?;
    let scroll = events::wire_scroll(&document, config.scroll, targets)?;
    let palette = palette::wire_palette(&document, &targets.features_section)?;
    let graphic =
        PlatformGraphic::default().with_drawing_window(config.drawing_start, config.drawing_end);
    let platform = platform::wire_platform(&document, graphic, targets)?;
    let showcase = showcase::wire_showcase(&document, targets)?;
    let reveal = reveal::wire_reveal(&document, &targets.reveal_sections, config.reveal_fraction)?;

    Ok(Mounted {
        scroll,
        _glow: glow,
        _palette: palette,
        _platform: platform,
        _reveal: reveal,
        _showcase: showcase,
    })
}

/// Handle returned to the host page. Call `unmount` (or let it be freed) when
/// the effects' sections leave the page.
#[wasm_bindgen]
pub struct MotionHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl MotionHandle {
    #[wasm_bindgen(js_name = scrollOffset)]
    pub fn scroll_offset(&self) -> f64 {
        self.mounted
            .as_ref()
            .map(|m| m.scroll.tracker().offset())
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("motion effects detached");
        }
    }
}

/// Overrides applied on top of the default configuration before mounting.
#[wasm_bindgen]
pub struct MotionOptions {
    config: MotionConfig,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            config: MotionConfig::default(),
        }
    }
}

#[wasm_bindgen]
impl MotionOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MotionOptions {
        Self::default()
    }

    #[wasm_bindgen(js_name = setGlowSmoothing)]
    pub fn set_glow_smoothing(&mut self, smoothing: f32) {
        self.config.glow.smoothing = smoothing;
    }

    #[wasm_bindgen(js_name = setGlowRadii)]
    pub fn set_glow_radii(&mut self, idle: f32, pressed: f32) {
        self.config.glow.radius_idle = idle;
        self.config.glow.radius_pressed = pressed;
    }

    #[wasm_bindgen(js_name = setScrollToTopThreshold)]
    pub fn set_scroll_to_top_threshold(&mut self, px: f64) {
        self.config.scroll.scroll_to_top = px;
    }

    #[wasm_bindgen(js_name = setHeaderThreshold)]
    pub fn set_header_threshold(&mut self, px: f64) {
        self.config.scroll.header_scrolled = px;
    }

    #[wasm_bindgen(js_name = setParallaxFactor)]
    pub fn set_parallax_factor(&mut self, factor: f64) {
        self.config.scroll.parallax_factor = factor;
    }

    #[wasm_bindgen(js_name = setDrawingWindow)]
    pub fn set_drawing_window(&mut self, start: f64, end: f64) {
        self.config.drawing_start = start;
        self.config.drawing_end = end;
    }

    #[wasm_bindgen(js_name = setRevealFraction)]
    pub fn set_reveal_fraction(&mut self, fraction: f64) {
        self.config.reveal_fraction = fraction;
    }

    /// `name` is one of the kebab-case target names, e.g. `"header"`.
    #[wasm_bindgen(js_name = setTarget)]
    pub fn set_target(&mut self, name: &str, id: &str) -> Result<(), JsValue> {
        self.config
            .targets
            .set(name, id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = clearRevealSections)]
    pub fn clear_reveal_sections(&mut self) {
        self.config.targets.reveal_sections.clear();
    }

    #[wasm_bindgen(js_name = addRevealSection)]
    pub fn add_reveal_section(&mut self, id: String) {
        self.config.targets.reveal_sections.push(id);
    }
}

fn mount_config(config: &MotionConfig) -> Result<MotionHandle, JsValue> {
    match attach(config) {
        Ok(mounted) => {
            log::info!("motion effects attached");
            Ok(MotionHandle {
                mounted: Some(mounted),
            })
        }
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Mount with the default configuration.
#[wasm_bindgen]
pub fn mount() -> Result<MotionHandle, JsValue> {
    mount_config(&MotionConfig::default())
}

/// Mount with host-supplied overrides; invalid values reject the mount.
#[wasm_bindgen(js_name = mountWith)]
pub fn mount_with(options: &MotionOptions) -> Result<MotionHandle, JsValue> {
    mount_config(&options.config)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");
    Ok(())
}
