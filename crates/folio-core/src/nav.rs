//! Mobile navigation menu state.

/// Which of the two menu glyphs are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavIcons {
    pub menu_visible: bool,
    pub close_visible: bool,
}

impl NavIcons {
    /// CSS `display` value for a glyph.
    pub fn display(visible: bool) -> &'static str {
        if visible { "block" } else { "none" }
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub const OPEN_CLASS: &'static str = "open";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) -> NavIcons {
        self.open = !self.open;
        self.icons()
    }

    /// A menu link was followed. Always closes.
    pub fn close(&mut self) -> NavIcons {
        self.open = false;
        self.icons()
    }

    /// Re-sync from the DOM, in case something else toggled the class.
    pub fn sync(&mut self, open: bool) {
        self.open = open;
    }

    pub fn icons(&self) -> NavIcons {
        NavIcons {
            menu_visible: !self.open,
            close_visible: self.open,
        }
    }
}
