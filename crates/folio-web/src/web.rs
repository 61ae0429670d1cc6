//! WebAssembly entry point.

use std::cell::RefCell;

use folio_core::SiteConfig;
use wasm_bindgen::prelude::*;

use crate::dom::{DomResult, Page};
use crate::particles::ParticleEmitter;

/// Id of the optional inline JSON configuration element.
const CONFIG_ELEMENT_ID: &str = "folio-config";

thread_local! {
    static EMITTER: RefCell<Option<ParticleEmitter>> = const { RefCell::new(None) };
}

/// Read the inline configuration, if the page provides one.
fn read_config_json(page: &Page) -> Option<String> {
    page.document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}

fn init_features(page: &Page, config: &SiteConfig) -> DomResult<()> {
    crate::prefs::init(page, &config.storage_key)?;
    crate::panel::init(page)?;

    let emitter = ParticleEmitter::start(page, &config.particles)?;
    EMITTER.with(|cell| *cell.borrow_mut() = emitter);

    crate::nav::init(page)?;
    crate::contact::init(page, config.contact.success_timeout_ms)?;
    crate::filter::init(page)?;
    Ok(())
}

/// Initialize every site behavior present on the page.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let page = match Page::current() {
        Ok(page) => page,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
            return;
        }
    };

    let parsed = read_config_json(&page).map(|json| SiteConfig::from_json(&json));
    let level = match &parsed {
        Some(Ok(config)) => config.level().unwrap_or(log::Level::Info),
        _ => log::Level::Info,
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger already set: {}", e)));
    }

    let config = match parsed {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("{}; using default configuration", e);
            SiteConfig::default()
        }
        None => SiteConfig::default(),
    };

    log::info!("Starting Folio site behaviors");
    if let Err(e) = init_features(&page, &config) {
        log::error!("Failed to initialize page: {}", e);
    }
}

/// Stop the particle emitter and remove its particles.
#[wasm_bindgen]
pub fn stop_particles() {
    EMITTER.with(|cell| {
        if let Some(mut emitter) = cell.borrow_mut().take() {
            emitter.stop();
        }
    });
}
