pub mod config;
pub mod controller;
pub mod page;

pub use config::{resolve, BackToTopConfig, ConfigError, ConfigSource, JsonConfig};
pub use controller::{effective_threshold, BackToTop};
pub use page::{is_escape, is_legacy_user_agent, ClickEvent, ElementSignature, Page, LINK};

/// The public contract of a widget that can be switched on and off.
pub trait Enablable {
    /// Called once at startup; equivalent to `set_enabled(true)`.
    fn initialise(&mut self);

    fn set_enabled(&mut self, enable: bool);
}

/// Stand-in used where the platform cannot host the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inert;

impl Enablable for Inert {
    fn initialise(&mut self) {}

    fn set_enabled(&mut self, _enable: bool) {}
}
