use super::error::DomError;
use shared_constants::{SHED_HIDE_EVENT, SHED_SHOW_EVENT};
use web_sys::{CustomEvent, CustomEventInit, Element};

/// Whether a visibility change is announced to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notify {
    Observers,
    Quiet,
}

pub fn is_hidden(element: &Element) -> bool {
    element.has_attribute("hidden")
}

pub fn show(element: &Element, notify: Notify) -> Result<(), DomError> {
    if !is_hidden(element) {
        return Ok(());
    }
    element.remove_attribute("hidden")?;
    element.remove_attribute("aria-hidden")?;
    announce(element, SHED_SHOW_EVENT, notify)
}

pub fn hide(element: &Element, notify: Notify) -> Result<(), DomError> {
    if is_hidden(element) {
        return Ok(());
    }
    element.set_attribute("hidden", "")?;
    element.set_attribute("aria-hidden", "true")?;
    announce(element, SHED_HIDE_EVENT, notify)
}

fn announce(element: &Element, event_name: &str, notify: Notify) -> Result<(), DomError> {
    if notify == Notify::Quiet {
        return Ok(());
    }
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    let event = CustomEvent::new_with_event_init_dict(event_name, &init)?;
    element.dispatch_event(&event)?;
    Ok(())
}
