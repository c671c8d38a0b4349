#![cfg(target_arch = "wasm32")]

use back_to_top::app::{
    backtop::{create_with, BackToTopHandle},
    focus,
    has::Capabilities,
    i18n,
    shed::{self, Notify},
    signature, viewport,
};
use js_sys::{Function, Promise, Reflect};
use models::{Enablable, LINK};
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fixture(html: &str) -> Element {
    let doc = doc();
    let body = doc.body().unwrap();
    let container = doc.create_element("div").unwrap();
    container.set_inner_html(html);
    body.insert_before(&container, body.first_child().as_ref())
        .unwrap();
    container
}

fn remove_links() {
    let body = doc().body().unwrap();
    while let Some(link) = signature::find_descendant(&body, &LINK) {
        link.remove();
    }
}

fn count_events(element: &Element, name: &str) -> (Rc<Cell<u32>>, Closure<dyn FnMut(Event)>) {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_| seen.set(seen.get() + 1));
    element
        .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
        .unwrap();
    (count, callback)
}

fn fire_scroll() {
    let event = Event::new("scroll").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn set_config(json: &str) {
    let value = js_sys::JSON::parse(json).unwrap();
    js_sys::Reflect::set(&web_sys::window().unwrap(), &JsValue::from_str("wcconfig"), &value)
        .unwrap();
}

fn clear_config() {
    js_sys::Reflect::delete_property(&web_sys::window().unwrap(), &JsValue::from_str("wcconfig"))
        .unwrap();
}

async fn sleep_ms(duration_ms: i32) {
    let promise = Promise::new(&mut |resolve: Function, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration_ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Waits for a smooth scroll to settle at the top.
async fn wait_for_top() -> f64 {
    for _ in 0..50 {
        if viewport::scroll_offset() == 0.0 {
            break;
        }
        sleep_ms(100).await;
    }
    viewport::scroll_offset()
}

fn click_link_icon(link: &Element) -> bool {
    let icon = link.query_selector("i").unwrap().unwrap();
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    icon.dispatch_event(&click).unwrap()
}

#[wasm_bindgen_test]
fn shed_quiet_changes_skip_observers() {
    let container = fixture("<p id='shed-quiet'>text</p>");
    let target = doc().get_element_by_id("shed-quiet").unwrap();
    let (count, _guard) = count_events(&container, "wc.shed.hide");

    shed::hide(&target, Notify::Quiet).unwrap();
    assert!(shed::is_hidden(&target));
    assert_eq!(target.get_attribute("aria-hidden").as_deref(), Some("true"));
    shed::show(&target, Notify::Quiet).unwrap();
    assert!(!shed::is_hidden(&target));
    assert_eq!(count.get(), 0);

    container.remove();
}

#[wasm_bindgen_test]
fn shed_notifies_observers_on_change_only() {
    let container = fixture("<p id='shed-loud'>text</p>");
    let target = doc().get_element_by_id("shed-loud").unwrap();
    let (hides, _hide_guard) = count_events(&container, "wc.shed.hide");
    let (shows, _show_guard) = count_events(&container, "wc.shed.show");

    shed::hide(&target, Notify::Observers).unwrap();
    shed::hide(&target, Notify::Observers).unwrap();
    shed::show(&target, Notify::Observers).unwrap();
    shed::show(&target, Notify::Observers).unwrap();

    assert_eq!(hides.get(), 1);
    assert_eq!(shows.get(), 1);
    container.remove();
}

#[wasm_bindgen_test]
fn focus_skips_disabled_and_hidden_tabstops() {
    let container = fixture(
        "<button disabled>off</button>\
         <div hidden><a href='#x'>hidden</a></div>\
         <span>plain</span>\
         <input id='focus-target'>",
    );

    assert!(focus::focus_first_tabstop(&container));
    let active = doc().active_element().unwrap();
    assert_eq!(active.id(), "focus-target");

    let empty = fixture("<span>nothing here</span>");
    assert!(!focus::focus_first_tabstop(&empty));

    container.remove();
    empty.remove();
}

#[wasm_bindgen_test]
fn signature_matches_link_and_its_children() {
    let container = fixture("<a class='wc_btt' href='#'><i id='sig-icon'></i></a>");
    let icon = doc().get_element_by_id("sig-icon").unwrap();

    let link = signature::find_ancestor(&icon, &LINK).expect("icon is inside the link");
    assert_eq!(link.tag_name().to_lowercase(), "a");
    assert!(signature::find_ancestor(&container, &LINK).is_none());
    assert!(signature::find_descendant(&container, &LINK).is_some());

    container.remove();
}

#[wasm_bindgen_test]
fn i18n_uses_builtin_table_and_key_fallback() {
    assert_eq!(i18n::get("back_to_top"), "Back to top");
    assert_eq!(i18n::get("no_such_key"), "no_such_key");
}

#[wasm_bindgen_test]
fn legacy_platform_gets_inert_widget() {
    remove_links();
    set_config(r#"{"wc/ui/backToTop": {"scroll": 1}}"#);
    let spacer = fixture("<div style='height:5000px'></div>");
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 300.0);

    let mut widget = create_with(Capabilities { legacy_ie: true });
    widget.initialise();
    fire_scroll();

    let body = doc().body().unwrap();
    assert!(signature::find_descendant(&body, &LINK).is_none());

    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    spacer.remove();
    clear_config();
}

#[wasm_bindgen_test]
async fn link_follows_scroll_click_and_escape() {
    remove_links();
    set_config(r#"{"wc/ui/backToTop": {"scroll": 1}}"#);
    let page = fixture(
        "<button id='first-stop'>first</button>\
         <div style='height:5000px'></div>",
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 300.0);

    let mut widget = BackToTopHandle::new();
    widget.initialise();
    assert!(widget.is_enabled());
    assert!(widget.is_listening());

    fire_scroll();
    let body = doc().body().unwrap();
    let link = signature::find_descendant(&body, &LINK).expect("link created past threshold");
    assert!(!shed::is_hidden(&link));
    assert_eq!(link.get_attribute("href").as_deref(), Some("#"));
    let label = link.query_selector(".wc-off").unwrap().unwrap();
    assert_eq!(label.text_content().as_deref(), Some("Back to top"));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    body.dispatch_event(&escape).unwrap();
    assert!(shed::is_hidden(&link));

    fire_scroll();
    assert!(!shed::is_hidden(&link));

    let not_prevented = click_link_icon(&link);
    assert!(!not_prevented, "click on the link prevents navigation");
    let active = doc()
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .unwrap();
    assert_eq!(active.id(), "first-stop");
    assert_eq!(wait_for_top().await, 0.0);

    widget.set_enabled(false);
    assert!(!widget.is_enabled());
    assert!(!widget.is_listening());
    assert!(shed::is_hidden(&link));

    window.scroll_to_with_x_and_y(0.0, 600.0);
    fire_scroll();
    assert!(shed::is_hidden(&link));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    remove_links();
    page.remove();
    clear_config();
}

#[wasm_bindgen_test]
fn click_zeroes_offsets_without_native_scroll_to() {
    remove_links();
    set_config(r#"{"wc/ui/backToTop": {"scroll": 1}}"#);
    let page = fixture(
        "<button id='fallback-stop'>first</button>\
         <div style='height:5000px'></div>",
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 300.0);
    assert!(viewport::scroll_offset() > 1.0);

    let mut widget = BackToTopHandle::new();
    widget.initialise();
    fire_scroll();
    let body = doc().body().unwrap();
    let link = signature::find_descendant(&body, &LINK).expect("link created past threshold");

    // An own `undefined` property shadows `Window.prototype.scrollTo`.
    Reflect::set(&window, &JsValue::from_str("scrollTo"), &JsValue::UNDEFINED).unwrap();
    let not_prevented = click_link_icon(&link);
    Reflect::delete_property(&window, &JsValue::from_str("scrollTo")).unwrap();

    assert!(!not_prevented);
    assert_eq!(viewport::scroll_offset(), 0.0);
    assert_eq!(doc().document_element().unwrap().scroll_top(), 0);
    assert_eq!(body.scroll_top(), 0);

    widget.set_enabled(false);
    remove_links();
    page.remove();
    clear_config();
}
