//! Thin helpers over `web-sys` for element lookup, listeners, and timers.

use folio_core::{ToggleSwitch, timer_delay};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// DOM access errors.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("No window object")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

pub type DomResult<T> = Result<T, DomError>;

/// The window and document of the running page.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> DomResult<Self> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Element by id, if present.
    pub fn element(&self, id: &str) -> Option<HtmlElement> {
        self.element_as(id)
    }

    /// Element by id, cast to a concrete type.
    pub fn element_as<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("Invalid selector: {}", selector);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// The `<html>` element.
    pub fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    pub fn root_has_class(&self, class: &str) -> bool {
        self.root()
            .map(|root| root.class_list().contains(class))
            .unwrap_or(false)
    }

    /// Run `f` once after `ms` milliseconds.
    pub fn set_timeout(&self, ms: u32, f: impl FnOnce() + 'static) -> DomResult<i32> {
        let callback = Closure::once_into_js(f);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timer_delay(ms),
            )?;
        Ok(handle)
    }

    /// Run `f` every `ms` milliseconds until the returned handle is cleared.
    pub fn set_interval(&self, ms: u32, f: impl FnMut() + 'static) -> DomResult<Interval> {
        let callback = Closure::<dyn FnMut()>::new(f);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timer_delay(ms),
            )?;
        Ok(Interval {
            id,
            window: self.window.clone(),
            _callback: callback,
        })
    }
}

/// A running `setInterval`. Must be kept alive while the interval runs.
pub struct Interval {
    id: i32,
    window: Window,
    // Dropping the closure while the interval is registered would leave JS
    // calling into freed memory.
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn clear(self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> DomResult<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Listeners are never removed
    Ok(())
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to toggle class {}: {:?}", class, e);
    }
}

/// Set the inline `display` of an element.
pub fn set_display(element: &Element, display: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property("display", display) {
            log::warn!("Failed to set display: {:?}", e);
        }
    }
}

/// Show (`block`) or hide (`none`) an element.
pub fn show(element: &Element, visible: bool) {
    set_display(element, if visible { "block" } else { "none" });
}

/// Render a switch-style toggle: `on` class plus `aria-checked`.
pub fn render_switch(element: &Element, switch: ToggleSwitch) {
    set_class(element, ToggleSwitch::ON_CLASS, switch.on);
    if let Err(e) = element.set_attribute("aria-checked", switch.aria_checked()) {
        log::warn!("Failed to set aria-checked: {:?}", e);
    }
}
