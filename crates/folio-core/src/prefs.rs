//! Preference state and its reducer.
//!
//! The page keeps one [`PreferenceStore`] per session. Every change goes
//! through [`reduce`], which returns a new [`Preferences`] value instead of
//! mutating shared state in place.

use serde::{Deserialize, Serialize};

/// Text scale applied to the document body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    XLarge,
}

impl FontSize {
    /// Name used in the `data-size` attribute of size buttons.
    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Normal => "normal",
            FontSize::Large => "large",
            FontSize::XLarge => "xlarge",
        }
    }

    /// Body class for this size, if any.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            FontSize::Normal => None,
            FontSize::Large => Some("text-large"),
            FontSize::XLarge => Some("text-xlarge"),
        }
    }
}

/// User-selected UI options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark: bool,
    pub font_size: FontSize,
    pub contrast: bool,
    pub no_anim: bool,
}

/// A change to the preference state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceAction {
    SetDark(bool),
    ToggleDark,
    SetFontSize(FontSize),
    SetContrast(bool),
    ToggleContrast,
    SetNoAnim(bool),
    ToggleNoAnim,
    /// Restore every preference to its default.
    Reset,
}

/// Compute the state that follows `action`.
pub fn reduce(prefs: &Preferences, action: PreferenceAction) -> Preferences {
    let mut next = *prefs;
    match action {
        PreferenceAction::SetDark(on) => next.dark = on,
        PreferenceAction::ToggleDark => next.dark = !prefs.dark,
        PreferenceAction::SetFontSize(size) => next.font_size = size,
        PreferenceAction::SetContrast(on) => next.contrast = on,
        PreferenceAction::ToggleContrast => next.contrast = !prefs.contrast,
        PreferenceAction::SetNoAnim(disabled) => next.no_anim = disabled,
        PreferenceAction::ToggleNoAnim => next.no_anim = !prefs.no_anim,
        PreferenceAction::Reset => next = Preferences::default(),
    }
    next
}

/// Which parts of the page need re-rendering after an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceChange {
    pub dark: bool,
    pub font_size: bool,
    pub contrast: bool,
    pub no_anim: bool,
}

impl PreferenceChange {
    fn for_action(action: PreferenceAction) -> Self {
        match action {
            PreferenceAction::SetDark(_) | PreferenceAction::ToggleDark => Self {
                dark: true,
                ..Default::default()
            },
            PreferenceAction::SetFontSize(_) => Self {
                font_size: true,
                ..Default::default()
            },
            PreferenceAction::SetContrast(_) | PreferenceAction::ToggleContrast => Self {
                contrast: true,
                ..Default::default()
            },
            PreferenceAction::SetNoAnim(_) | PreferenceAction::ToggleNoAnim => Self {
                no_anim: true,
                ..Default::default()
            },
            // Reset re-applies everything, even unchanged values.
            PreferenceAction::Reset => Self {
                dark: true,
                font_size: true,
                contrast: true,
                no_anim: true,
            },
        }
    }
}

/// Holds the current preferences for the page session.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    current: Preferences,
}

impl PreferenceStore {
    /// Create a store with default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and report what needs re-rendering.
    pub fn dispatch(&mut self, action: PreferenceAction) -> (Preferences, PreferenceChange) {
        self.current = reduce(&self.current, action);
        log::debug!("Preference action {:?} -> {:?}", action, self.current);
        (self.current, PreferenceChange::for_action(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let start = Preferences {
            dark: true,
            font_size: FontSize::Large,
            contrast: false,
            no_anim: true,
        };
        for action in [
            PreferenceAction::ToggleDark,
            PreferenceAction::ToggleContrast,
            PreferenceAction::ToggleNoAnim,
        ] {
            let once = reduce(&start, action);
            assert_ne!(once, start);
            assert_eq!(reduce(&once, action), start);
        }
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut store = PreferenceStore::new();
        store.dispatch(PreferenceAction::SetDark(true));
        store.dispatch(PreferenceAction::SetFontSize(FontSize::XLarge));
        store.dispatch(PreferenceAction::ToggleContrast);
        let (before, _) = store.dispatch(PreferenceAction::SetNoAnim(true));
        assert!(before.dark && before.contrast && before.no_anim);

        let (prefs, change) = store.dispatch(PreferenceAction::Reset);

        assert!(!prefs.dark);
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert!(!prefs.contrast);
        assert!(!prefs.no_anim);
        assert!(change.dark && change.font_size && change.contrast && change.no_anim);
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let prefs = Preferences::default();
        let next = reduce(&prefs, PreferenceAction::SetFontSize(FontSize::XLarge));
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert_eq!(next.font_size, FontSize::XLarge);
    }

    #[test]
    fn test_change_is_scoped_to_action() {
        let mut store = PreferenceStore::new();
        let (_, change) = store.dispatch(PreferenceAction::ToggleContrast);
        assert_eq!(
            change,
            PreferenceChange {
                contrast: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_font_size_names() {
        let names: Vec<_> = [FontSize::Normal, FontSize::Large, FontSize::XLarge]
            .into_iter()
            .map(FontSize::as_str)
            .collect();
        assert_eq!(names, vec!["normal", "large", "xlarge"]);
        assert_eq!(FontSize::Normal.body_class(), None);
        assert_eq!(FontSize::XLarge.body_class(), Some("text-xlarge"));
    }
}
