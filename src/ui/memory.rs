//! In-memory UI state.

use serde::Serialize;

use crate::models::{DropdownOption, DropdownState};
use crate::ui::UserInterface;

/// A UI whose controls live in plain fields.
///
/// Starts the way the page does: dropdown hidden, loading indicator shown,
/// no error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryView {
    pub dropdown: DropdownState,
    pub dropdown_visible: bool,
    pub loading_visible: bool,
    pub error: Option<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the view has left the loading state, either way.
    pub fn is_settled(&self) -> bool {
        !self.loading_visible
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            dropdown: DropdownState::new(),
            dropdown_visible: false,
            loading_visible: true,
            error: None,
        }
    }
}

impl UserInterface for MemoryView {
    fn clear_options(&mut self) {
        self.dropdown.clear();
    }

    fn append_option(&mut self, option: DropdownOption) {
        self.dropdown.push(option);
    }

    fn set_dropdown_visible(&mut self, visible: bool) {
        self.dropdown_visible = visible;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}
