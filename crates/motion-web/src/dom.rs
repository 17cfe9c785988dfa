use anyhow::anyhow;
use motion_core::{SectionGeometry, StyleSink, StyleValue, StyleVar};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn viewport_height() -> Option<f64> {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
}

#[inline]
pub fn scroll_offset() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Fresh geometry of `el`; `None` once it has left the document.
pub fn section_geometry(el: &web::Element) -> Option<SectionGeometry> {
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    Some(SectionGeometry::new(
        rect.top(),
        rect.height(),
        viewport_height()?,
    ))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// CSS custom properties on `document.documentElement`.
#[derive(Clone)]
pub struct RootStyle {
    style: web::CssStyleDeclaration,
}

impl RootStyle {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow!("no document element"))?;
        let root: web::HtmlElement = root
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            style: root.style(),
        })
    }
}

impl StyleSink for RootStyle {
    fn set(&mut self, var: StyleVar, value: StyleValue) {
        _ = self.style.set_property(var.css_name(), &value.to_string());
    }
}
