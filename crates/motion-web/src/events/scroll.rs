use crate::dom;
use crate::listener::EventListener;
use anyhow::anyhow;
use motion_core::{ScrollThresholds, ScrollTracker, Subscription, TargetIds};
use web_sys as web;

/// Page scroll offset fanned out from one passive listener to the
/// structural consumers (scroll-to-top control, header, hero parallax).
pub struct ScrollWiring {
    tracker: ScrollTracker,
    _listeners: Vec<EventListener>,
    _subscriptions: Vec<Subscription<f64>>,
}

impl ScrollWiring {
    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }
}

pub fn wire_scroll(
    document: &web::Document,
    thresholds: ScrollThresholds,
    targets: &TargetIds,
) -> anyhow::Result<ScrollWiring> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let tracker = ScrollTracker::new(dom::scroll_offset());

    let t = tracker.clone();
    let mut listeners = vec![EventListener::new(
        &window,
        "scroll",
        true,
        move |_: web::Event| t.record(dom::scroll_offset()),
    )?];
    let mut subscriptions = Vec::new();

    if let Some(button) = document.get_element_by_id(&targets.scroll_to_top) {
        let el = button.clone();
        subscriptions.push(Subscription::new(tracker.signal(), move |y| {
            dom::set_class(&el, "is-visible", thresholds.show_scroll_to_top(y));
        }));
        let w = window.clone();
        listeners.push(EventListener::new(
            &button,
            "click",
            false,
            move |_: web::MouseEvent| {
                let opts = web::ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            },
        )?);
    } else {
        log::warn!("[scroll] #{} not found", targets.scroll_to_top);
    }

    if let Some(header) = document.get_element_by_id(&targets.header) {
        subscriptions.push(Subscription::new(tracker.signal(), move |y| {
            dom::set_class(&header, "is-scrolled", thresholds.header_is_scrolled(y));
        }));
    } else {
        log::warn!("[scroll] #{} not found", targets.header);
    }

    if let Some(grid) = dom::html_element_by_id(document, &targets.hero_grid) {
        subscriptions.push(Subscription::new(tracker.signal(), move |y| {
            let transform = format!("translateY({}px)", thresholds.parallax_offset(y));
            _ = grid.style().set_property("transform", &transform);
        }));
    } else {
        log::warn!("[scroll] #{} not found", targets.hero_grid);
    }

    log::info!(
        "[scroll] attached with {} consumers at offset {:.0}",
        subscriptions.len(),
        tracker.offset()
    );
    Ok(ScrollWiring {
        tracker,
        _listeners: listeners,
        _subscriptions: subscriptions,
    })
}
