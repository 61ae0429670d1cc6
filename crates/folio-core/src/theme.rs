//! Visual state derived from [`Preferences`].
//!
//! These are the values the binding layer writes into the DOM. Nothing here
//! touches the page itself.

use crate::prefs::{FontSize, Preferences};

/// Root class enabling the dark palette.
pub const DARK_CLASS: &str = "dark";
/// Root class enabling high-contrast colors.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
/// Root class suppressing decorative animation.
pub const NO_ANIMATIONS_CLASS: &str = "no-animations";
/// Body classes owned by the text-size controller.
pub const FONT_SIZE_CLASSES: [&str; 2] = ["text-large", "text-xlarge"];

pub const ICON_SUN: &str = "☀️";
pub const ICON_MOON: &str = "🌙";

pub const HEADER_BG_DARK: &str = "rgba(17,24,39,0.9)";
pub const HEADER_BG_LIGHT: &str = "rgba(255,255,255,0.85)";

/// State of a switch-style toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSwitch {
    pub on: bool,
}

impl ToggleSwitch {
    /// Class added while the switch is on.
    pub const ON_CLASS: &'static str = "on";

    pub fn new(on: bool) -> Self {
        Self { on }
    }

    /// Value for the `aria-checked` attribute.
    pub fn aria_checked(&self) -> &'static str {
        if self.on { "true" } else { "false" }
    }
}

/// Everything the theme controller renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeVisuals {
    pub root_dark: bool,
    pub icon: &'static str,
    pub header_background: &'static str,
    pub toggle: ToggleSwitch,
}

impl ThemeVisuals {
    pub fn for_dark(on: bool) -> Self {
        Self {
            root_dark: on,
            icon: if on { ICON_SUN } else { ICON_MOON },
            header_background: if on { HEADER_BG_DARK } else { HEADER_BG_LIGHT },
            toggle: ToggleSwitch::new(on),
        }
    }
}

/// Whether a size button declaring `declared` should look active.
pub fn size_button_active(declared: Option<&str>, selected: FontSize) -> bool {
    declared == Some(selected.as_str())
}

/// Full visual state of the preference controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageVisuals {
    pub theme: ThemeVisuals,
    pub body_size_class: Option<&'static str>,
    pub contrast: ToggleSwitch,
    pub no_anim: ToggleSwitch,
}

impl From<Preferences> for PageVisuals {
    fn from(prefs: Preferences) -> Self {
        Self {
            theme: ThemeVisuals::for_dark(prefs.dark),
            body_size_class: prefs.font_size.body_class(),
            contrast: ToggleSwitch::new(prefs.contrast),
            no_anim: ToggleSwitch::new(prefs.no_anim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{PreferenceAction, reduce};

    #[test]
    fn test_dark_visuals() {
        let dark = ThemeVisuals::for_dark(true);
        assert_eq!(dark.icon, ICON_SUN);
        assert_eq!(dark.header_background, HEADER_BG_DARK);
        assert_eq!(dark.toggle.aria_checked(), "true");

        let light = ThemeVisuals::for_dark(false);
        assert_eq!(light.icon, ICON_MOON);
        assert_eq!(light.header_background, HEADER_BG_LIGHT);
        assert_eq!(light.toggle.aria_checked(), "false");
    }

    #[test]
    fn test_visuals_restored_after_double_toggle() {
        let start = Preferences::default();
        let before = PageVisuals::from(start);
        for action in [
            PreferenceAction::ToggleDark,
            PreferenceAction::ToggleContrast,
            PreferenceAction::ToggleNoAnim,
        ] {
            let twice = reduce(&reduce(&start, action), action);
            assert_eq!(PageVisuals::from(twice), before);
        }
    }

    #[test]
    fn test_size_button_active() {
        assert!(size_button_active(Some("large"), FontSize::Large));
        assert!(!size_button_active(Some("normal"), FontSize::Large));
        assert!(!size_button_active(None, FontSize::Normal));
    }
}
