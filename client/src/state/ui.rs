//! Local UI chrome state for the dashboard shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth state so the dashboard
//! header can evolve independently of the credential flow.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the dashboard header.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Whether the profile dropdown is visible.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
