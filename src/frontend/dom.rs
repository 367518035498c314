//! Thin fallible wrappers over the browser APIs the page touches.

use js_sys::Reflect;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::{
    config::{SiteConfig, CONFIG_ELEMENT_ID},
    error::PageError,
    theme::{Theme, THEME_ATTRIBUTE},
};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::MissingDocument)
}

/// Reads the optional JSON override block. No block means defaults.
pub fn site_config() -> Result<SiteConfig, PageError> {
    let Some(element) = document()?.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SiteConfig::default());
    };

    SiteConfig::from_json(&element.text_content().unwrap_or_default())
}

pub fn apply_theme(theme: Theme) -> Result<(), PageError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| PageError::MissingElement("html".to_string()))?;
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|win| win.scroll_y().map_err(PageError::from))
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) -> Result<(), PageError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Document offset of the element with `id`, if it is on the page.
pub fn element_offset_top(id: &str) -> Option<f64> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|element| f64::from(element.offset_top()))
}

/// `(id, offset_top)` for every `section` in document order. Sections
/// without an id report an empty one.
pub fn section_offsets() -> Vec<(String, f64)> {
    let Ok(sections) = document().and_then(|doc| doc.query_selector_all("section").map_err(PageError::from)) else {
        return Vec::new();
    };

    (0..sections.length())
        .filter_map(|index| sections.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| (section.id(), f64::from(section.offset_top())))
        .collect()
}

pub fn navigate_to(url: &str) -> Result<(), PageError> {
    window()?.location().set_href(url)?;
    Ok(())
}

/// Looks up a global installed by a third-party script.
pub fn global(name: &'static str) -> Result<JsValue, PageError> {
    let value = Reflect::get(&window()?, &JsValue::from_str(name))?;

    if value.is_undefined() || value.is_null() {
        Err(PageError::MissingGlobal(name))
    } else {
        Ok(value)
    }
}

/// An event listener that stays registered until dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, PageError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::new(&window()?, event, handler)
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Result<Self, PageError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::new(&document()?, event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
