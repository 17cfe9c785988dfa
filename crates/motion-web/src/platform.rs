use crate::dom;
use crate::listener::EventListener;
use anyhow::anyhow;
use motion_core::{
    section_progress, PlatformFrame, PlatformGraphic, Signal, Subscription, TargetIds,
};
use web_sys as web;

// Parks hidden tracer dots outside the view box.
const TRACER_PARKED: f64 = -10.0;

/// Pinned platform section: progress through its scroll range draws the
/// three rings in turn and reveals the caption and feature cards once
/// complete.
pub struct PlatformDriver {
    _listener: EventListener,
    _subscription: Subscription<f64>,
}

struct RingElements {
    path: Option<web::Element>,
    tracer: Option<web::Element>,
}

/// Elements whose state follows the finished drawing.
struct DrawnTargets {
    graphic: Option<web::Element>,
    features: Option<web::Element>,
}

fn apply_frame(frame: &PlatformFrame, rings: &[RingElements], drawn: &DrawnTargets) {
    for (ring, els) in frame.rings.iter().zip(rings) {
        if let Some(path) = &els.path {
            _ = path.set_attribute("stroke-dashoffset", &ring.dash_offset.to_string());
        }
        if let Some(tracer) = &els.tracer {
            let (x, y, opacity) = match ring.tracer {
                Some(p) => (p.x, p.y, "1"),
                None => (TRACER_PARKED, TRACER_PARKED, "0"),
            };
            _ = tracer.set_attribute("cx", &x.to_string());
            _ = tracer.set_attribute("cy", &y.to_string());
            _ = tracer.set_attribute("opacity", opacity);
        }
    }
    if let Some(g) = &drawn.graphic {
        dom::set_class(g, "is-drawn", frame.is_drawn());
    }
    if let Some(f) = &drawn.features {
        dom::set_class(f, "is-revealed", frame.is_drawn());
    }
}

fn lookup(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[platform] #{} not found", id);
    }
    el
}

pub fn wire_platform(
    document: &web::Document,
    graphic: PlatformGraphic,
    targets: &TargetIds,
) -> anyhow::Result<Option<PlatformDriver>> {
    let Some(section) = document.get_element_by_id(&targets.platform_section) else {
        log::warn!("[platform] #{} not found", targets.platform_section);
        return Ok(None);
    };
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;

    let rings: Vec<RingElements> = graphic
        .rings()
        .iter()
        .enumerate()
        .map(|(i, rect)| {
            let path = lookup(document, &targets.platform_ring(i));
            if let Some(p) = &path {
                let dash = rect.dash_length().to_string();
                _ = p.set_attribute("d", &rect.path_d());
                _ = p.set_attribute("stroke-dasharray", &dash);
            }
            RingElements {
                path,
                tracer: lookup(document, &targets.platform_tracer(i)),
            }
        })
        .collect();
    let drawn = DrawnTargets {
        graphic: lookup(document, &targets.platform_graphic),
        features: lookup(document, &targets.platform_features),
    };

    let progress = Signal::new(0.0_f64);
    let subscription = Subscription::new(&progress, move |p| {
        apply_frame(&graphic.frame(p), &rings, &drawn);
    });

    let recompute = {
        let progress = progress.clone();
        move || {
            if let Some(geometry) = dom::section_geometry(&section) {
                progress.set(section_progress(geometry));
            }
        }
    };
    recompute();
    let listener =
        EventListener::new(&window, "scroll", true, move |_: web::Event| recompute())?;

    log::info!(
        "[platform] attached to #{} at progress {:.2}",
        targets.platform_section,
        progress.get()
    );
    Ok(Some(PlatformDriver {
        _listener: listener,
        _subscription: subscription,
    }))
}
