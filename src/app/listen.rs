use super::{dom_page::Controller, dom_page::DomClick, error::DomError};
use js_sys::Function;
use leptos::prelude::{document, window};
use std::{cell::RefCell, rc::Weak};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent};

/// A DOM event listener that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Registers `handler` for `event_name` on `target`.
    ///
    /// # Errors
    /// Returns an error if the browser refuses the registration.
    pub fn new<F>(
        target: &EventTarget,
        event_name: &'static str,
        passive: bool,
        handler: F,
    ) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let opt = AddEventListenerOptions::new();
        opt.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            callback.as_ref().unchecked_ref::<Function>(),
            &opt,
        )?;
        Ok(Self {
            target: target.clone(),
            event_name,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref::<Function>(),
        ) {
            log::error!(
                "Failed to remove {} event listener: {e:?}",
                self.event_name
            );
        }
    }
}

/// The click, keydown, scroll and resize listeners of one back to top link.
pub struct Listeners {
    _attached: Vec<EventListener>,
}

/// Wraps a controller call so events reach the controller only while it is
/// alive and not already borrowed.
fn dispatch<F>(owner: &Weak<RefCell<Controller>>, handle: F) -> impl FnMut(Event) + 'static
where
    F: Fn(&mut Controller, &Event) + 'static,
{
    let owner = owner.clone();
    move |event: Event| {
        let Some(cell) = owner.upgrade() else {
            return;
        };
        let Ok(mut controller) = cell.try_borrow_mut() else {
            log::warn!("Back to top busy, dropped {} event", event.type_());
            return;
        };
        handle(&mut *controller, &event);
    }
}

/// Attaches the back to top listeners: click and keydown on the body, scroll
/// and resize on the window.
///
/// # Errors
/// Returns an error if the body is missing or a registration fails. Listeners
/// registered before the failure are removed again.
pub fn attach(owner: &Weak<RefCell<Controller>>) -> Result<Listeners, DomError> {
    let body: EventTarget = document().body().ok_or(DomError::MissingBody)?.into();
    let win: EventTarget = window().into();

    let click = EventListener::new(
        &body,
        "click",
        false,
        dispatch(owner, |controller, event| {
            controller.on_click(&DomClick(event));
        }),
    )?;
    let keydown = EventListener::new(
        &body,
        "keydown",
        false,
        dispatch(owner, |controller, event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                controller.on_key(&event.key());
            }
        }),
    )?;
    let scroll = EventListener::new(
        &win,
        "scroll",
        true,
        dispatch(owner, |controller, _| controller.on_scroll()),
    )?;
    let resize = EventListener::new(
        &win,
        "resize",
        true,
        dispatch(owner, |controller, _| controller.on_scroll()),
    )?;

    Ok(Listeners {
        _attached: vec![click, keydown, scroll, resize],
    })
}
