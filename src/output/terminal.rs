//! Terminal renderer: one line per option, styled like a select box.

use colored::Colorize;

use crate::output::OutputRenderer;
use crate::ui::MemoryView;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, view: &MemoryView) -> String {
        if let Some(ref error) = view.error {
            return format!("  {} {}\n", "✖".red().bold(), error.red());
        }
        if !view.is_settled() {
            return format!("  {}\n", "Loading users…".dimmed());
        }
        if view.dropdown.is_empty() {
            return format!("  {}\n", "No users.".dimmed());
        }

        let width = view
            .dropdown
            .options()
            .iter()
            .map(|o| o.value.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for option in view.dropdown.options() {
            output.push_str(&format!(
                "  {}  {}",
                format!("{:>width$}", option.value).cyan(),
                option.label.bold(),
            ));
            if let Some(ref avatar) = option.avatar {
                output.push_str(&format!("  {}", avatar.dimmed()));
            }
            output.push('\n');
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        let count = view.dropdown.len();
        output.push_str(&format!(
            " {} {}\n",
            count.to_string().bold(),
            if count == 1 { "user" } else { "users" },
        ));

        output
    }
}
