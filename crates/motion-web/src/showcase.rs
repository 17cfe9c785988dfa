use crate::dom;
use crate::listener::EventListener;
use anyhow::anyhow;
use motion_core::{SectionPointer, TargetIds};
use web_sys as web;

/// Work showcase: section-local spotlight coordinates and a pointer-driven
/// tilt of the showcase graphic.
pub struct ShowcaseTilt {
    _listener: EventListener,
}

pub fn wire_showcase(
    document: &web::Document,
    targets: &TargetIds,
) -> anyhow::Result<Option<ShowcaseTilt>> {
    let Some(section) = dom::html_element_by_id(document, &targets.work_section) else {
        log::warn!("[showcase] #{} not found", targets.work_section);
        return Ok(None);
    };
    let graphic = dom::html_element_by_id(document, &targets.work_graphic);
    if let Some(g) = &graphic {
        _ = g.style().set_property("transition", "transform 0.3s ease-out");
    }
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;

    let listener = EventListener::new(&window, "pointermove", true, move |ev: web::PointerEvent| {
        if !section.is_connected() {
            return;
        }
        let rect = section.get_bounding_client_rect();
        let Some(pointer) = SectionPointer::from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) else {
            return;
        };
        let style = section.style();
        _ = style.set_property("--mouse-x", &format!("{}px", pointer.local.x));
        _ = style.set_property("--mouse-y", &format!("{}px", pointer.local.y));
        if let Some(g) = &graphic {
            _ = g.style().set_property("transform", &pointer.transform_css());
        }
    })?;

    log::info!("[showcase] attached to #{}", targets.work_section);
    Ok(Some(ShowcaseTilt {
        _listener: listener,
    }))
}
