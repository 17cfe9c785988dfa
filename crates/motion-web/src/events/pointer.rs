use crate::dom::{self, RootStyle};
use crate::frame::{start_loop, AnimationLoop};
use crate::listener::EventListener;
use anyhow::anyhow;
use motion_core::{publish, GlowParams, GlowTracker, Writer};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const GLOW_TRANSITION: &str = "opacity 0.3s ease-in-out, background 0.2s ease-out";
const GLOW_BACKGROUND: &str = "radial-gradient(var(--glow-radius) at var(--mouse-x) var(--mouse-y), rgba(var(--mouse-glow-rgb), 0.08), transparent 80%)";

/// Live cursor glow. Dropping it detaches every listener and stops the loop.
pub struct GlowWiring {
    _listeners: Vec<EventListener>,
    _frame_loop: AnimationLoop,
}

fn publish_appearance(glow: &GlowTracker, style: &mut RootStyle) {
    if let Err(e) = publish(style, Writer::Glow, &glow.appearance_vars()) {
        log::error!("[glow] {}", e);
    }
}

pub fn wire_glow(
    document: &web::Document,
    params: GlowParams,
    overlay_id: &str,
) -> anyhow::Result<GlowWiring> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let style = RootStyle::from_document(document)?;

    match dom::html_element_by_id(document, overlay_id) {
        Some(overlay) => {
            let s = overlay.style();
            _ = s.set_property("transition", GLOW_TRANSITION);
            _ = s.set_property("background", GLOW_BACKGROUND);
            _ = s.set_property("opacity", "var(--glow-opacity)");
        }
        None => log::warn!("[glow] #{} not found; variables still published", overlay_id),
    }

    let glow = Rc::new(RefCell::new(GlowTracker::new(params)));
    publish_appearance(&glow.borrow(), &mut style.clone());

    let mut listeners = Vec::with_capacity(5);

    let g = glow.clone();
    listeners.push(EventListener::new(
        &window,
        "pointermove",
        true,
        move |ev: web::PointerEvent| {
            g.borrow_mut()
                .record_move(ev.client_x() as f32, ev.client_y() as f32);
        },
    )?);

    for (event, pressed) in [("pointerdown", true), ("pointerup", false)] {
        let g = glow.clone();
        let mut s = style.clone();
        listeners.push(EventListener::new(
            &window,
            event,
            true,
            move |_: web::PointerEvent| {
                let mut glow = g.borrow_mut();
                glow.set_pressed(pressed);
                publish_appearance(&glow, &mut s);
            },
        )?);
    }

    for (event, inside) in [("mouseenter", true), ("mouseleave", false)] {
        let g = glow.clone();
        let mut s = style.clone();
        listeners.push(EventListener::new(
            &body,
            event,
            true,
            move |_: web::MouseEvent| {
                let mut glow = g.borrow_mut();
                if inside {
                    glow.pointer_enter();
                } else {
                    glow.pointer_leave();
                }
                publish_appearance(&glow, &mut s);
            },
        )?);
    }

    let g = glow.clone();
    let mut s = style;
    let frame_loop = start_loop(move || {
        let mut glow = g.borrow_mut();
        glow.advance_frame();
        if let Err(e) = publish(&mut s, Writer::Glow, &glow.position_vars()) {
            log::error!("[glow] {}", e);
        }
    });

    log::info!("[glow] attached");
    Ok(GlowWiring {
        _listeners: listeners,
        _frame_loop: frame_loop,
    })
}
