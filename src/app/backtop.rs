// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

use super::{
    config::GlobalConfig,
    dom_page::{Controller, DomPage},
    has::Capabilities,
};
use crate::log_fn;
use leptos::prelude::*;
use models::{BackToTop, Enablable, Inert};
use std::{cell::RefCell, rc::Rc};

/// The back to top link bound to the current document.
pub struct BackToTopHandle(Rc<RefCell<Controller>>);

impl BackToTopHandle {
    pub fn new() -> Self {
        Self(Rc::new_cyclic(|owner| {
            RefCell::new(BackToTop::new(DomPage::new(owner.clone()), GlobalConfig))
        }))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.try_borrow().is_ok_and(|controller| controller.is_enabled())
    }

    pub fn is_listening(&self) -> bool {
        self.0
            .try_borrow()
            .is_ok_and(|controller| controller.is_listening())
    }

    fn with_controller(&self, action: impl FnOnce(&mut Controller)) {
        match self.0.try_borrow_mut() {
            Ok(mut controller) => action(&mut *controller),
            Err(e) => log::error!("Back to top is busy: {e}"),
        }
    }
}

impl Default for BackToTopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Enablable for BackToTopHandle {
    fn initialise(&mut self) {
        log_fn!("back_to_top::initialise", {
            self.with_controller(|controller| controller.initialise());
        })
    }

    fn set_enabled(&mut self, enable: bool) {
        log_fn!("back_to_top::set_enabled", {
            self.with_controller(|controller| controller.set_enabled(enable));
        })
    }
}

/// Creates the back to top link for this platform.
pub fn create() -> Box<dyn Enablable> {
    create_with(Capabilities::detect())
}

pub fn create_with(capabilities: Capabilities) -> Box<dyn Enablable> {
    if capabilities.legacy_ie {
        log::info!("Back to top link is not supported on this platform");
        return Box::new(Inert);
    }
    Box::new(BackToTopHandle::new())
}

/// Mounts the back to top link for the lifetime of the component.
#[component]
pub fn BackTop() -> impl IntoView {
    let widget = StoredValue::new_local(create());

    Effect::new(move |_| {
        widget.update_value(|widget| widget.initialise());
    });

    on_cleanup(move || {
        widget.update_value(|widget| widget.set_enabled(false));
    });
}
