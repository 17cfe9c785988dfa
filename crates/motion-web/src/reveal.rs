use crate::dom;
use crate::frame::CoalescedFrame;
use crate::listener::EventListener;
use anyhow::anyhow;
use motion_core::RevealLatch;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const REVEAL_BLOCKS: &str = ".fade-in-up, .stagger-children";
const REVEAL_CLASS: &str = "is-visible";

/// Fades in each content section's blocks the first time it scrolls into
/// view. Revealed sections stay revealed.
pub struct RevealDriver {
    _listener: EventListener,
    _frame: Rc<CoalescedFrame>,
}

struct RevealSection {
    element: web::Element,
    latch: RevealLatch,
}

fn reveal_blocks(section: &web::Element) {
    let Ok(blocks) = section.query_selector_all(REVEAL_BLOCKS) else {
        return;
    };
    for i in 0..blocks.length() {
        if let Some(el) = blocks.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            dom::set_class(&el, REVEAL_CLASS, true);
        }
    }
}

pub fn wire_reveal(
    document: &web::Document,
    section_ids: &[String],
    min_fraction: f64,
) -> anyhow::Result<Option<RevealDriver>> {
    let mut sections: Vec<RevealSection> = section_ids
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id);
            if element.is_none() {
                log::warn!("[reveal] #{} not found", id);
            }
            element
        })
        .map(|element| RevealSection {
            element,
            latch: RevealLatch::new(min_fraction),
        })
        .collect();
    if sections.is_empty() {
        return Ok(None);
    }
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let count = sections.len();

    let frame = Rc::new(CoalescedFrame::new(move || {
        for s in sections.iter_mut().filter(|s| !s.latch.is_revealed()) {
            let Some(geometry) = dom::section_geometry(&s.element) else {
                continue;
            };
            if s.latch.observe(geometry) {
                reveal_blocks(&s.element);
            }
        }
    }));

    let f = frame.clone();
    let listener =
        EventListener::new(&window, "scroll", true, move |_: web::Event| f.request())?;
    frame.request();

    log::info!("[reveal] watching {} sections", count);
    Ok(Some(RevealDriver {
        _listener: listener,
        _frame: frame,
    }))
}
