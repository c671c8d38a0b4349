use models::ElementSignature;
use web_sys::Element;

/// The closest element matching `signature`, starting at `element` itself.
pub fn find_ancestor(element: &Element, signature: &ElementSignature) -> Option<Element> {
    element.closest(&signature.selector()).ok().flatten()
}

/// The first descendant of `root` matching `signature`, in document order.
pub fn find_descendant(root: &Element, signature: &ElementSignature) -> Option<Element> {
    root.query_selector(&signature.selector()).ok().flatten()
}
