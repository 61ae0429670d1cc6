//! Accessibility panel open/close.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{AccessibilityPanel, ClickTarget};
use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::dom::{DomResult, Page, listen, set_class};

pub fn init(page: &Page) -> DomResult<()> {
    let (Some(trigger), Some(panel)) = (page.element("a11y-btn"), page.element("a11y-panel")) else {
        log::debug!("Accessibility panel not present");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(AccessibilityPanel::new()));

    {
        let state = state.clone();
        let panel = panel.clone();
        listen(&trigger, "click", move |event| {
            event.stop_propagation();
            let open = state.borrow_mut().toggle();
            set_class(&panel, AccessibilityPanel::OPEN_CLASS, open);
        })?;
    }

    let trigger_node: Node = trigger.into();
    listen(&page.document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let clicked = match &target {
            Some(node) if panel.contains(Some(node)) => ClickTarget::InsidePanel,
            Some(node) if trigger_node.is_same_node(Some(node)) => ClickTarget::Trigger,
            _ => ClickTarget::Outside,
        };
        let open = state.borrow_mut().document_click(clicked);
        set_class(&panel, AccessibilityPanel::OPEN_CLASS, open);
    })
}
