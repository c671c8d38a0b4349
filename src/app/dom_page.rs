use super::{
    config::GlobalConfig,
    error::DomError,
    focus, i18n,
    listen::{self, Listeners},
    shed::{self, Notify},
    signature, viewport,
};
use leptos::prelude::document;
use models::{BackToTop, ClickEvent, ElementSignature, Page, LINK};
use shared_constants::{ICON_CLASSES, LINK_CLASS, LINK_HREF, LINK_TAG, OFFSCREEN_CLASS};
use std::{cell::RefCell, rc::Weak};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub type Controller = BackToTop<DomPage, GlobalConfig>;

/// The live document, as seen by the back to top controller.
pub struct DomPage {
    owner: Weak<RefCell<Controller>>,
}

impl DomPage {
    /// `owner` is the controller this page is handed to; listeners reach it
    /// through this reference.
    pub fn new(owner: Weak<RefCell<Controller>>) -> Self {
        Self { owner }
    }

    fn link(&self) -> Option<Element> {
        let body = document().body()?;
        signature::find_descendant(&body, &LINK)
    }
}

impl Page for DomPage {
    type Listeners = Listeners;
    type Error = DomError;

    fn scroll_offset(&self) -> f64 {
        viewport::scroll_offset()
    }

    fn viewport_height(&self) -> f64 {
        viewport::size().height
    }

    fn has_link(&self) -> bool {
        self.link().is_some()
    }

    fn create_link(&mut self, label: &str) -> Result<(), DomError> {
        let doc = document();
        let body = doc.body().ok_or(DomError::MissingBody)?;

        let link = doc.create_element(LINK_TAG)?;
        link.set_class_name(LINK_CLASS);
        link.set_attribute("href", LINK_HREF)?;

        let icon = doc.create_element("i")?;
        icon.set_class_name(ICON_CLASSES);
        icon.set_attribute("aria-hidden", "true")?;
        link.append_child(&icon)?;

        let text = doc.create_element("span")?;
        text.set_class_name(OFFSCREEN_CLASS);
        text.set_text_content(Some(label));
        link.append_child(&text)?;

        body.append_child(&link)?;
        log::debug!("Created back to top link");
        Ok(())
    }

    fn set_link_visible(&mut self, visible: bool) -> Result<(), DomError> {
        let Some(link) = self.link() else {
            return Ok(());
        };
        // Nothing else needs to know when the link comes and goes.
        if visible {
            shed::show(&link, Notify::Quiet)
        } else {
            shed::hide(&link, Notify::Quiet)
        }
    }

    fn scroll_to_top(&mut self) -> Result<(), DomError> {
        viewport::scroll_to_top()
    }

    fn focus_first_tabstop(&mut self) -> bool {
        document()
            .document_element()
            .is_some_and(|root| focus::focus_first_tabstop(&root))
    }

    fn translate(&self, key: &str) -> String {
        i18n::get(key)
    }

    fn listen(&mut self) -> Result<Listeners, DomError> {
        listen::attach(&self.owner)
    }
}

/// A browser click as seen by the controller.
pub struct DomClick<'a>(pub &'a Event);

impl ClickEvent for DomClick<'_> {
    fn default_prevented(&self) -> bool {
        self.0.default_prevented()
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn is_within(&self, signature: &ElementSignature) -> bool {
        self.0
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| signature::find_ancestor(&element, signature))
            .is_some()
    }
}
