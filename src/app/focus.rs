use shared_constants::FOCUSABLE_QUERY;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

fn is_tabstop(element: &HtmlElement) -> bool {
    !element.has_attribute("disabled")
        && element.closest("[hidden]").ok().flatten().is_none()
}

/// Focuses the first tabstop inside `container`. Returns false if there is none.
pub fn focus_first_tabstop(container: &Element) -> bool {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return false;
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(is_tabstop)
        .any(|element| element.focus().is_ok())
}
