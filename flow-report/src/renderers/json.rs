//! JSON renderer for structured output

use crate::app::FlowView;
use super::FlowRenderer;

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowRenderer for JsonRenderer {
    fn render(&self, view: &FlowView) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(view)
        } else {
            serde_json::to_string(view)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
