//! Flow Report - navigation model for multi-step user flow performance reports
//!
//! A flow is an ordered list of captured steps (navigations, timespans and
//! snapshots). This crate derives the selected step from the document address,
//! labels steps per gather mode, builds the sidebar entries and renders the
//! resulting view as HTML, JSON or terminal output.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Navigation model
pub mod address;
pub mod labeler;
pub mod location;
pub mod navigation;
pub mod sidebar;

// Presentation
pub mod app;
pub mod content;
pub mod renderers;

// Re-export main types for convenience
pub use address::{parse_address, AddressCodec, QueryStepCodec};
pub use app::{FlowApp, FlowView};
pub use config::FlowReportConfig;
pub use content::{Content, ContentSwitcher, StepReport};
pub use error::{FlowReportError, Result};
pub use labeler::{label_modes, label_steps};
pub use location::{Location, Subscription};
pub use navigation::{CurrentStep, NavigationState, Selection};
pub use renderers::{CliRenderer, FlowRenderer, HtmlRenderer, JsonRenderer};
pub use sidebar::{Sidebar, SidebarController, SidebarEntry, SummaryEntry};
pub use types::{Category, ConfigSettings, FlowResult, GatherMode, Step};

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = FlowReportError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = FlowReportError::malformed_step("step", "OHNO");
        assert!(error.to_string().contains("OHNO"));

        let error = FlowReportError::EmptyFlow;
        assert!(error.to_string().contains("no steps"));
    }
}
