use crate::config::{self, BackToTopConfig, ConfigSource};
use crate::page::{is_escape, ClickEvent, Page, LINK};
use crate::Enablable;
use shared_constants::{DEFAULT_MIN_SCROLL, LABEL_KEY};

/// Threshold in pixels: the configured minimum when positive, otherwise one
/// viewport height.
pub fn effective_threshold(min_scroll: u32, viewport_height: f64) -> f64 {
    if min_scroll > 0 {
        f64::from(min_scroll)
    } else {
        viewport_height
    }
}

/// The back to top link controller bound to one page.
pub struct BackToTop<P, C>
where
    P: Page,
    C: ConfigSource,
{
    page: P,
    config_source: C,
    enabled: bool,
    config: Option<BackToTopConfig>,
    min_scroll: u32,
    listeners: Option<P::Listeners>,
}

impl<P, C> BackToTop<P, C>
where
    P: Page,
    C: ConfigSource,
{
    pub fn new(page: P, config_source: C) -> Self {
        Self {
            page,
            config_source,
            enabled: true,
            config: None,
            min_scroll: DEFAULT_MIN_SCROLL,
            listeners: None,
        }
    }

    pub fn initialise(&mut self) {
        self.set_enabled(true);
    }

    /// Turns the link on or off. Configuration is resolved on the first
    /// enable only; listeners are attached at most once per enabled period.
    pub fn set_enabled(&mut self, enable: bool) {
        self.enabled = enable;
        if enable {
            let source = &self.config_source;
            let config = *self.config.get_or_insert_with(|| config::resolve(source));
            self.min_scroll = config.scroll;
            if self.listeners.is_none() {
                match self.page.listen() {
                    Ok(listeners) => {
                        log::debug!("Back to top listeners attached");
                        self.listeners = Some(listeners);
                    }
                    Err(err) => log::error!("Failed to attach back to top listeners: {err}"),
                }
            }
        } else {
            self.toggle(false);
            if self.listeners.take().is_some() {
                log::debug!("Back to top listeners detached");
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_listening(&self) -> bool {
        self.listeners.is_some()
    }

    pub fn threshold(&self) -> f64 {
        effective_threshold(self.min_scroll, self.page.viewport_height())
    }

    /// Scroll and resize handler.
    pub fn on_scroll(&mut self) {
        let show = self.page.scroll_offset() > self.threshold();
        self.toggle(show);
    }

    pub fn on_key(&mut self, key: &str) {
        if is_escape(key) {
            self.toggle(false);
        }
    }

    /// Leaves visibility alone: the scroll events that follow decide it.
    pub fn on_click(&mut self, event: &impl ClickEvent) {
        if !self.enabled || event.default_prevented() || !event.is_within(&LINK) {
            return;
        }
        event.prevent_default();
        if let Err(err) = self.page.scroll_to_top() {
            log::error!("Failed to scroll to top: {err}");
        }
        if !self.page.focus_first_tabstop() {
            log::debug!("Nothing focusable after scrolling to top");
        }
    }

    fn toggle(&mut self, show: bool) {
        if show {
            if !self.page.has_link() {
                let label = self.page.translate(LABEL_KEY);
                if let Err(err) = self.page.create_link(&label) {
                    log::error!("Failed to create back to top link: {err}");
                    return;
                }
            }
            if let Err(err) = self.page.set_link_visible(true) {
                log::error!("Failed to show back to top link: {err}");
            }
        } else if self.page.has_link() {
            if let Err(err) = self.page.set_link_visible(false) {
                log::error!("Failed to hide back to top link: {err}");
            }
        }
    }
}

impl<P, C> Enablable for BackToTop<P, C>
where
    P: Page,
    C: ConfigSource,
{
    fn initialise(&mut self) {
        BackToTop::initialise(self);
    }

    fn set_enabled(&mut self, enable: bool) {
        BackToTop::set_enabled(self, enable);
    }
}
