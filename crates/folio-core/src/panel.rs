//! Accessibility settings panel.

/// Where a document click landed, relative to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    InsidePanel,
    Trigger,
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessibilityPanel {
    open: bool,
}

impl AccessibilityPanel {
    pub const OPEN_CLASS: &'static str = "open";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger button clicked. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Document-level click. Returns the new open state.
    pub fn document_click(&mut self, target: ClickTarget) -> bool {
        if target == ClickTarget::Outside {
            self.open = false;
        }
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_click_closes() {
        let mut panel = AccessibilityPanel::new();
        assert!(panel.toggle());
        assert!(!panel.document_click(ClickTarget::Outside));
    }

    #[test]
    fn test_inside_and_trigger_clicks_keep_open() {
        let mut panel = AccessibilityPanel::new();
        panel.toggle();
        assert!(panel.document_click(ClickTarget::InsidePanel));
        assert!(panel.document_click(ClickTarget::Trigger));
    }

    #[test]
    fn test_trigger_toggles() {
        let mut panel = AccessibilityPanel::new();
        panel.toggle();
        assert!(!panel.toggle());
    }
}
