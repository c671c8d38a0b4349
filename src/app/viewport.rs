use super::error::DomError;
use js_sys::{Function, Reflect};
use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

pub fn size() -> ViewportSize {
    let w = window();
    let inner = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64());
    match (inner(w.inner_width()), inner(w.inner_height())) {
        (Some(width), Some(height)) => ViewportSize { width, height },
        _ => {
            let (width, height) = document()
                .document_element()
                .map(|root| (root.client_width(), root.client_height()))
                .unwrap_or_default();
            ViewportSize {
                width: f64::from(width),
                height: f64::from(height),
            }
        }
    }
}

/// The document scroll offset, read from the root element and, when that
/// reports nothing, from the body.
pub fn scroll_offset() -> f64 {
    let doc = document();
    let root = doc.document_element().map_or(0.0, |root| scroll_top(&root));
    let body = doc.body().map_or(0.0, |body| scroll_top(&body));
    root_or_body(root, body)
}

/// `scrollTop` as the browser reports it, fractional under zoom.
fn scroll_top(element: &Element) -> f64 {
    Reflect::get(element, &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_default()
}

fn root_or_body(root: f64, body: f64) -> f64 {
    if root != 0.0 {
        root
    } else {
        body
    }
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let w = window();
    let has_scroll_to = Reflect::get(&w, &JsValue::from_str("scrollTo"))
        .map(|value| value.is_instance_of::<Function>())
        .unwrap_or(false);

    if has_scroll_to {
        let opt = web_sys::ScrollToOptions::new();
        opt.set_top(0.0);
        opt.set_left(0.0);
        opt.set_behavior(web_sys::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opt);
        return Ok(());
    }

    let doc = document();
    doc.document_element()
        .ok_or(DomError::MissingRoot)?
        .set_scroll_top(0);
    if let Some(body) = doc.body() {
        body.set_scroll_top(0);
    }
    Ok(())
}
