//! Renderers for flow views in different output formats
//!
//! Renderers only present a [`FlowView`]; every navigation decision has already
//! been made by the time one is called.

use crate::app::FlowView;

/// Render a flow view to a string in a specific format
pub trait FlowRenderer {
    fn render(&self, view: &FlowView) -> String;

    /// File extension for the produced format
    fn extension(&self) -> &'static str;
}

pub mod cli;
pub mod html;
pub mod json;
pub mod table;

pub use cli::CliRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use table::{TableBuilder, TableStyle};
