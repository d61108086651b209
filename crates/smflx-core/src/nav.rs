//! Navbar toggles.
//!
//! Unlike the reveal trigger, [`ScrollState`] follows the scroll position in
//! both directions. [`MenuState`] is driven purely by clicks.

/// Vertical offset past which the navbar switches to its compact form.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether the page has scrolled past a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    threshold_px: f64,
    scrolled: bool,
}

impl ScrollState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Track the current vertical offset. Returns `true` if the state flipped.
    pub fn update(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

/// Mobile overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Menu control clicked.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// A navigation link was activated.
    pub fn navigated(self) -> Self {
        Self::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_sequence() {
        let mut state = ScrollState::new(50.0);
        let seen: Vec<bool> = [0.0, 60.0, 10.0, 80.0]
            .into_iter()
            .map(|y| {
                state.update(y);
                state.is_scrolled()
            })
            .collect();
        assert_eq!(seen, vec![false, true, false, true]);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut state = ScrollState::default();
        state.update(50.0);
        assert!(!state.is_scrolled());
        state.update(50.5);
        assert!(state.is_scrolled());
    }

    #[test]
    fn test_scroll_update_reports_changes() {
        let mut state = ScrollState::default();
        assert!(!state.update(10.0));
        assert!(state.update(100.0));
        assert!(!state.update(200.0));
        assert!(state.update(0.0));
    }

    #[test]
    fn test_menu_toggle_parity() {
        for clicks in 0..8 {
            let state = (0..clicks).fold(MenuState::default(), |s, _| s.toggled());
            assert_eq!(state.is_open(), clicks % 2 == 1, "after {} clicks", clicks);
        }
    }

    #[test]
    fn test_navigation_closes_menu() {
        assert_eq!(MenuState::Open.navigated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.navigated(), MenuState::Closed);
    }
}
