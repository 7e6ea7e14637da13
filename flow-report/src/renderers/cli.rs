//! Terminal renderer: sidebar as a table followed by the selected content

use super::table::{cells, TableBuilder, TableStyle};
use super::FlowRenderer;
use crate::app::FlowView;
use crate::content::Content;

/// Marker printed next to the current sidebar entry
const CURRENT_MARKER: &str = "▶";

/// Renderer for terminal output
pub struct CliRenderer {
    /// Whether to include the runtime settings block
    pub include_settings: bool,
}

impl CliRenderer {
    pub fn new() -> Self {
        Self {
            include_settings: true,
        }
    }

    pub fn without_settings() -> Self {
        Self {
            include_settings: false,
        }
    }

    fn sidebar_table(view: &FlowView) -> String {
        let mut builder = TableBuilder::with_style(TableStyle::Boxed);
        builder.headers(vec!["", "Step", "Mode", "Address"]);

        let summary = &view.sidebar.summary;
        builder.styled_row(Self::row(summary.is_current, &summary.label, "", &summary.target_address));

        for entry in &view.sidebar.steps {
            builder.styled_row(Self::row(
                entry.is_current,
                &entry.label,
                entry.mode.as_str(),
                &entry.target_address,
            ));
        }

        builder.build()
    }

    fn row(is_current: bool, label: &str, mode: &str, target: &str) -> Vec<comfy_table::Cell> {
        if is_current {
            vec![
                cells::current(CURRENT_MARKER),
                cells::current(label),
                cells::normal(mode),
                cells::muted(target),
            ]
        } else {
            vec![
                cells::normal(""),
                cells::normal(label),
                cells::normal(mode),
                cells::muted(target),
            ]
        }
    }

    fn content_block(content: &Content) -> String {
        match content {
            Content::Summary => "SUMMARY\n".to_string(),
            Content::Report(report) => {
                let mut builder = TableBuilder::with_style(TableStyle::Plain);
                builder.headers(vec![format!("{} - {}", report.label, report.url)]);
                for score in &report.scores {
                    builder.line(score.as_str());
                }
                format!("{}\n", builder.build())
            }
        }
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowRenderer for CliRenderer {
    fn render(&self, view: &FlowView) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n{}\n\n", view.sidebar.header.title, view.sidebar.header.date));

        if self.include_settings {
            if let Some(settings) = &view.sidebar.runtime_settings {
                output.push_str(&format!("Runtime settings: {}\n", settings.summary));
                if let Some(agent) = &settings.emulated_user_agent {
                    output.push_str(&format!("Emulated user agent: {}\n", agent));
                }
                if let Some(channel) = &settings.channel {
                    output.push_str(&format!("Channel: {}\n", channel));
                }
                output.push('\n');
            }
        }

        output.push_str(&Self::sidebar_table(view));
        output.push_str("\n\n");
        output.push_str(&Self::content_block(&view.content));
        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
