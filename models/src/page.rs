use shared_constants::{LINK_CLASS, LINK_TAG};

/// Describes an element by tag name and a class it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementSignature {
    pub tag: &'static str,
    pub class: &'static str,
}

impl ElementSignature {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }

    pub fn selector(&self) -> String {
        format!("{}.{}", self.tag, self.class)
    }
}

/// The injected back to top anchor.
pub const LINK: ElementSignature = ElementSignature::new(LINK_TAG, LINK_CLASS);

/// The document the back to top link lives in.
///
/// Implementations own every browser side effect so the controller can be
/// driven without a DOM.
pub trait Page {
    /// Subscription set for the click, keydown, scroll and resize listeners.
    /// Dropping it detaches all of them.
    type Listeners;
    type Error: std::error::Error;

    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn has_link(&self) -> bool;

    /// Appends the link, with its icon and off-screen `label`, to the body.
    fn create_link(&mut self, label: &str) -> Result<(), Self::Error>;

    /// Shows or hides the existing link without notifying observers.
    fn set_link_visible(&mut self, visible: bool) -> Result<(), Self::Error>;

    fn scroll_to_top(&mut self) -> Result<(), Self::Error>;

    /// Returns false when the document has nothing focusable.
    fn focus_first_tabstop(&mut self) -> bool;

    fn translate(&self, key: &str) -> String;

    fn listen(&mut self) -> Result<Self::Listeners, Self::Error>;
}

pub trait ClickEvent {
    fn default_prevented(&self) -> bool;

    fn prevent_default(&self);

    /// True when the event target is, or is inside, an element matching `signature`.
    fn is_within(&self, signature: &ElementSignature) -> bool;
}

/// `KeyboardEvent.key` values for the escape key, including the legacy `Esc`.
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Old Internet Explorer user agents, where the widget stays inert.
pub fn is_legacy_user_agent(user_agent: &str) -> bool {
    user_agent.contains("MSIE ") || user_agent.contains("Trident/")
}
