//! The UI surface the populator drives.
//!
//! Two controls matter: the user dropdown ([`DROPDOWN_ID`]) and the loading
//! indicator ([`LOADING_ID`]). [`UserInterface`] is the contract with whatever
//! hosts them; [`MemoryView`] keeps everything in memory for the CLI
//! renderers and for tests.

pub mod memory;

use crate::models::DropdownOption;

pub use crate::constants::{DROPDOWN_ID, LOADING_ID};

pub use memory::MemoryView;

/// Operations the populator performs on the host UI.
pub trait UserInterface {
    /// Remove every option from the dropdown.
    fn clear_options(&mut self);

    /// Append one option at the end of the dropdown.
    fn append_option(&mut self, option: DropdownOption);

    fn set_dropdown_visible(&mut self, visible: bool);

    fn set_loading_visible(&mut self, visible: bool);

    /// Display a failure message in place of the dropdown.
    fn show_error(&mut self, message: &str);

    /// Remove a message left by an earlier failed load.
    fn clear_error(&mut self);
}
