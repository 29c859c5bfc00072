//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `users`) so rendering controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and navigation chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Sidebar visibility on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, ..Self::default() }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
