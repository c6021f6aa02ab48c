//! JSON output renderer.
//!
//! Controls are keyed by their identifiers:
//! `{"user_id": {"visible": .., "options": [..]}, "loading": {"visible": ..}, "error": ..}`.

use serde_json::{Map, Value};

use crate::output::OutputRenderer;
use crate::ui::{MemoryView, DROPDOWN_ID, LOADING_ID};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, view: &MemoryView) -> String {
        let mut output = Map::new();
        output.insert(
            DROPDOWN_ID.to_string(),
            serde_json::json!({
                "visible": view.dropdown_visible,
                "options": view.dropdown,
            }),
        );
        output.insert(
            LOADING_ID.to_string(),
            serde_json::json!({ "visible": view.loading_visible }),
        );
        output.insert("error".to_string(), serde_json::json!(view.error));
        let output = Value::Object(output);

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
