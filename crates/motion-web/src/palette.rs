use crate::dom::{self, RootStyle};
use crate::frame::CoalescedFrame;
use crate::listener::EventListener;
use anyhow::anyhow;
use motion_core::{publish, Palette, Writer};
use std::rc::Rc;
use web_sys as web;

/// Recolours the theme from the reference section's distance to the
/// viewport centre, at most once per frame.
pub struct PaletteDriver {
    _listener: EventListener,
    _frame: Rc<CoalescedFrame>,
}

pub fn wire_palette(
    document: &web::Document,
    section_id: &str,
) -> anyhow::Result<Option<PaletteDriver>> {
    let Some(section) = document.get_element_by_id(section_id) else {
        log::warn!("[palette] #{} not found", section_id);
        return Ok(None);
    };
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let mut style = RootStyle::from_document(document)?;
    let palette = Palette::default();

    let frame = Rc::new(CoalescedFrame::new(move || {
        // section gone mid-flight: skip this tick
        let Some(geometry) = dom::section_geometry(&section) else {
            return;
        };
        if let Err(e) = publish(&mut style, Writer::Palette, &palette.evaluate(geometry)) {
            log::error!("[palette] {}", e);
        }
    }));

    let f = frame.clone();
    let listener =
        EventListener::new(&window, "scroll", true, move |_: web::Event| f.request())?;
    frame.request();

    log::info!("[palette] attached to #{}", section_id);
    Ok(Some(PaletteDriver {
        _listener: listener,
        _frame: frame,
    }))
}
