use leptos::prelude::window;
use models::is_legacy_user_agent;

/// Platform capabilities the widgets care about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub legacy_ie: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        let user_agent = window().navigator().user_agent().unwrap_or_default();
        let capabilities = Self {
            legacy_ie: is_legacy_user_agent(&user_agent),
        };
        log::debug!("Detected {capabilities:?}");
        capabilities
    }
}
