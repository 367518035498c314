//! Helpers for browser tests that mount components and drive them with
//! synthetic events.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};
use yew::{html::BaseComponent, AppHandle};

use super::dom;

/// Mounts `COMP` into a fresh element appended to `<body>`.
pub fn mount<COMP>(props: COMP::Properties) -> (AppHandle<COMP>, Element)
where
    COMP: BaseComponent,
{
    let document = dom::document().expect("document");
    let host = document.create_element("div").expect("host element");
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("attach host");

    let handle = yew::Renderer::<COMP>::with_root_and_props(host.clone(), props).render();
    (handle, host)
}

/// Lets the scheduler flush pending renders and effects.
pub async fn settle() {
    TimeoutFuture::new(0).await;
}

pub fn find(host: &Element, selector: &str) -> Element {
    host.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_name().split_whitespace().any(|name| name == class)
}

/// Dispatches a bubbling, cancelable mouse event. Returns whether the
/// default action was prevented.
pub fn mouse(target: &Element, kind: &str) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");

    target.dispatch_event(&event).expect("dispatch");
    event.default_prevented()
}

/// Dispatches a cancelable `keydown` on the document. Returns whether the
/// default action was prevented.
pub fn keydown(code: &str, ctrl: bool, shift: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_code(code);
    init.set_ctrl_key(ctrl);
    init.set_shift_key(shift);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");

    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch");
    event.default_prevented()
}

pub fn find_all(host: &Element, selector: &str) -> Vec<Element> {
    let nodes = host.query_selector_all(selector).expect("valid selector");
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
