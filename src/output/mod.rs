//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::ui::MemoryView;

/// Trait for rendering a settled user dropdown to an output format.
pub trait OutputRenderer {
    /// Render the view to a string.
    fn render(&self, view: &MemoryView) -> String;
}
