//! Browser tests for backdrop click classification.
//!
//! Run with `wasm-pack test --headless --firefox site`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use petchain_site::ClickOrigin;
use petchain_site::components::click_origin;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{Event, EventTarget, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn div() -> HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .unwrap()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

/// Backdrop with a nested panel, mounted in the body. The listener on the
/// backdrop records how each click it sees is classified.
fn overlay() -> (HtmlElement, HtmlElement, Rc<Cell<Option<ClickOrigin>>>) {
    let backdrop = div();
    let panel = div();
    backdrop.append_child(&panel).unwrap();
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .unwrap()
        .append_child(&backdrop)
        .unwrap();

    let seen = Rc::new(Cell::new(None));
    let target: EventTarget = backdrop.clone().into();
    let record = Rc::clone(&seen);
    let listener = Closure::<dyn Fn(Event)>::new(move |ev: Event| {
        record.set(Some(click_origin(&ev, Some(&target))));
    });
    backdrop
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .unwrap();
    listener.forget();

    (backdrop, panel, seen)
}

#[wasm_bindgen_test]
fn click_on_backdrop_is_backdrop() {
    let (backdrop, _panel, seen) = overlay();
    backdrop.click();
    assert_eq!(seen.get(), Some(ClickOrigin::Backdrop));
    backdrop.remove();
}

#[wasm_bindgen_test]
fn click_bubbling_from_panel_is_panel() {
    let (backdrop, panel, seen) = overlay();
    panel.click();
    assert_eq!(seen.get(), Some(ClickOrigin::Panel));
    backdrop.remove();
}

#[wasm_bindgen_test]
fn unmounted_backdrop_never_matches() {
    let backdrop = div();
    let seen = Rc::new(Cell::new(None));
    let record = Rc::clone(&seen);
    let listener = Closure::<dyn Fn(Event)>::new(move |ev: Event| {
        record.set(Some(click_origin(&ev, None)));
    });
    backdrop
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .unwrap();
    listener.forget();

    backdrop.click();
    assert_eq!(seen.get(), Some(ClickOrigin::Panel));
}
