//! Theme, text size, contrast, animation, and reset controls.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::theme::{
    DARK_CLASS, FONT_SIZE_CLASSES, HIGH_CONTRAST_CLASS, NO_ANIMATIONS_CLASS, size_button_active,
};
use folio_core::{
    FontSize, MemoryStorage, PageVisuals, PreferenceAction, PreferenceChange,
    PreferenceController, PreferenceStorage, Preferences,
};

use crate::dom::{DomResult, Page, listen, render_switch, set_class};

type Controller = Rc<RefCell<PreferenceController<Box<dyn PreferenceStorage>>>>;

/// Open `localStorage`, or fall back to an in-memory store for this session.
fn open_storage() -> Box<dyn PreferenceStorage> {
    match folio_core::storage::LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}; preferences will not persist", e);
            Box::new(MemoryStorage::new())
        }
    }
}

/// Write the parts of `prefs` flagged in `change` into the page.
fn render(page: &Page, prefs: Preferences, change: PreferenceChange) {
    let visuals = PageVisuals::from(prefs);
    let root = page.root();

    if change.dark {
        let theme = visuals.theme;
        if let Some(root) = &root {
            set_class(root, DARK_CLASS, theme.root_dark);
        }
        if let Some(icon) = page.element("header-icon") {
            icon.set_text_content(Some(theme.icon));
        }
        if let Some(header) = page.element("main-header") {
            if let Err(e) = header.style().set_property("background", theme.header_background) {
                log::warn!("Failed to set header background: {:?}", e);
            }
        }
        if let Some(toggle) = page.element("dark-toggle") {
            render_switch(&toggle, theme.toggle);
        }
    }

    if change.font_size {
        if let Some(body) = page.document.body() {
            for class in FONT_SIZE_CLASSES {
                set_class(&body, class, visuals.body_size_class == Some(class));
            }
        }
        for button in page.query_all(".size-btn") {
            let declared = button.get_attribute("data-size");
            set_class(
                &button,
                "active",
                size_button_active(declared.as_deref(), prefs.font_size),
            );
        }
    }

    if change.contrast {
        if let Some(root) = &root {
            set_class(root, HIGH_CONTRAST_CLASS, visuals.contrast.on);
        }
        if let Some(toggle) = page.element("contrast-toggle") {
            render_switch(&toggle, visuals.contrast);
        }
    }

    if change.no_anim {
        if let Some(root) = &root {
            set_class(root, NO_ANIMATIONS_CLASS, visuals.no_anim.on);
        }
        if let Some(toggle) = page.element("anim-toggle") {
            render_switch(&toggle, visuals.no_anim);
        }
    }
}

/// Dispatch `action` whenever the element `id` is clicked.
fn bind_click(
    page: &Page,
    controller: &Controller,
    id: &str,
    action: PreferenceAction,
) -> DomResult<()> {
    let Some(button) = page.element(id) else {
        log::debug!("#{} not found, skipping", id);
        return Ok(());
    };
    let page = page.clone();
    let controller = controller.clone();
    listen(&button, "click", move |_| {
        let (prefs, change) = controller.borrow_mut().dispatch(action);
        render(&page, prefs, change);
    })
}

/// Restore the stored theme and wire every preference control.
pub fn init(page: &Page, storage_key: &str) -> DomResult<()> {
    let controller: Controller = Rc::new(RefCell::new(PreferenceController::new(
        open_storage(),
        storage_key,
    )));

    let (prefs, change) = controller.borrow_mut().init_dark_mode();
    render(page, prefs, change);

    let bindings = [
        ("header-dark-btn", PreferenceAction::ToggleDark),
        ("dark-toggle", PreferenceAction::ToggleDark),
        ("btn-normal", PreferenceAction::SetFontSize(FontSize::Normal)),
        ("btn-large", PreferenceAction::SetFontSize(FontSize::Large)),
        ("btn-xlarge", PreferenceAction::SetFontSize(FontSize::XLarge)),
        ("contrast-toggle", PreferenceAction::ToggleContrast),
        ("anim-toggle", PreferenceAction::ToggleNoAnim),
        ("reset-btn", PreferenceAction::Reset),
    ];
    for (id, action) in bindings {
        bind_click(page, &controller, id, action)?;
    }
    Ok(())
}
