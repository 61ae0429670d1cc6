//! Contact form submit handling.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ContactForm, ContactSubmission, FieldErrors, SubmitOutcome};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{DomResult, Page, listen, show};

/// Current value of an `<input>` or `<textarea>`; empty when missing.
fn field_value(page: &Page, id: &str) -> String {
    let Some(element) = page.document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn init(page: &Page, success_timeout_ms: u32) -> DomResult<()> {
    let Some(form) = page.element_as::<HtmlFormElement>("contact-form") else {
        log::debug!("#contact-form not found, skipping");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(ContactForm::new()));
    let page = page.clone();
    let target = form.clone();

    listen(&target, "submit", move |event| {
        event.prevent_default();
        let submission = ContactSubmission::new(
            &field_value(&page, "name"),
            &field_value(&page, "email"),
            &field_value(&page, "message"),
        );

        let outcome = state.borrow_mut().submit(&submission);
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                for (id, visible) in errors.by_element() {
                    if let Some(element) = page.element(id) {
                        show(&element, visible);
                    }
                }
            }
            SubmitOutcome::Accepted { hide_generation } => {
                for (id, _) in FieldErrors::default().by_element() {
                    if let Some(element) = page.element(id) {
                        show(&element, false);
                    }
                }
                let success = page.element("form-success");
                if let Some(success) = &success {
                    show(success, true);
                }
                form.reset();
                log::info!("Contact form submitted");

                let state = state.clone();
                let hide = page.set_timeout(success_timeout_ms, move || {
                    if state.borrow_mut().hide_success(hide_generation) {
                        if let Some(success) = &success {
                            show(success, false);
                        }
                    }
                });
                if let Err(e) = hide {
                    log::warn!("Failed to schedule success hide: {}", e);
                }
            }
        }
    })
}
