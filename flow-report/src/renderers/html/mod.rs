//! HTML renderer producing a standalone flow report page

use super::FlowRenderer;
use crate::app::FlowView;

mod components;
mod templates;

pub use components::{escape_html, HtmlComponents, CURRENT_CLASS};
pub use templates::HtmlTemplate;

/// HTML renderer that generates self-contained report pages
pub struct HtmlRenderer {
    /// Whether to embed the stylesheet
    pub include_styles: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer with CSS styles
    pub fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Create an HTML renderer without CSS styles
    pub fn without_styles() -> Self {
        Self {
            include_styles: false,
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowRenderer for HtmlRenderer {
    fn render(&self, view: &FlowView) -> String {
        HtmlTemplate::new().render(view, self.include_styles)
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
