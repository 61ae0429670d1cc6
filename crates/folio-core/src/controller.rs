//! Preference store bound to persistent storage.

use crate::prefs::{PreferenceAction, PreferenceChange, PreferenceStore, Preferences};
use crate::storage::{PreferenceStorage, load_dark, save_dark};

/// Applies preference actions and mirrors the dark flag to storage.
pub struct PreferenceController<S: PreferenceStorage> {
    store: PreferenceStore,
    storage: S,
    key: String,
}

impl<S: PreferenceStorage> PreferenceController<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            store: PreferenceStore::new(),
            storage,
            key: key.into(),
        }
    }

    /// Load the stored dark flag and apply it.
    pub fn init_dark_mode(&mut self) -> (Preferences, PreferenceChange) {
        let dark = load_dark(&self.storage, &self.key);
        log::info!("Dark mode restored: {}", dark);
        self.dispatch(PreferenceAction::SetDark(dark))
    }

    /// Apply an action; persist the dark flag whenever it was set.
    pub fn dispatch(&mut self, action: PreferenceAction) -> (Preferences, PreferenceChange) {
        let (prefs, change) = self.store.dispatch(action);
        if change.dark {
            if let Err(e) = save_dark(&self.storage, &self.key, prefs.dark) {
                log::warn!("Failed to persist dark mode: {}", e);
            }
        }
        (prefs, change)
    }
}
