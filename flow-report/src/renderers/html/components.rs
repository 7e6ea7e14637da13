//! Reusable HTML fragments for the flow report page

use crate::content::Content;
use crate::sidebar::{RuntimeSettings, Sidebar, SidebarEntry, SidebarHeader, SummaryEntry};

/// Class added to the sidebar link of the current view
pub const CURRENT_CLASS: &str = "Sidebar_current";

/// Reusable HTML components for report generation
pub struct HtmlComponents;

impl HtmlComponents {
    /// Complete sidebar navigation
    pub fn sidebar(sidebar: &Sidebar) -> String {
        let mut html = String::new();
        html.push_str(r#"<nav class="Sidebar" aria-label="User flow steps">"#);
        html.push_str(&Self::sidebar_header(&sidebar.header));
        html.push_str(&Self::section_title("RUNTIME SETTINGS"));
        html.push_str(&Self::separator());
        if let Some(settings) = &sidebar.runtime_settings {
            html.push_str(&Self::runtime_settings(settings));
        }
        html.push_str(&Self::separator());
        html.push_str(&Self::section_title("USER FLOW"));
        html.push_str(&Self::separator());
        html.push_str(&Self::summary_link(&sidebar.summary));
        html.push_str(&Self::separator());
        for entry in &sidebar.steps {
            html.push_str(&Self::flow_step(entry));
        }
        html.push_str("</nav>");
        html
    }

    pub fn sidebar_header(header: &SidebarHeader) -> String {
        format!(
            r#"<div class="SidebarHeader"><div class="SidebarHeader_title">{}</div><div class="SidebarHeader_date">{}</div></div>"#,
            escape_html(&header.title),
            escape_html(&header.date)
        )
    }

    pub fn section_title(title: &str) -> String {
        format!(r#"<div class="SidebarSectionTitle">{}</div>"#, escape_html(title))
    }

    pub fn separator() -> String {
        r#"<div class="Separator" role="separator"></div>"#.to_string()
    }

    pub fn runtime_settings(settings: &RuntimeSettings) -> String {
        let mut details = format!(
            r#"<details class="SidebarRuntimeSettings"><summary>{}</summary>"#,
            escape_html(&settings.summary)
        );
        if let Some(agent) = &settings.emulated_user_agent {
            details.push_str(&format!("<div>Emulated user agent: {}</div>", escape_html(agent)));
        }
        if let Some(channel) = &settings.channel {
            details.push_str(&format!("<div>Channel: {}</div>", escape_html(channel)));
        }
        details.push_str("</details>");
        details
    }

    pub fn summary_link(summary: &SummaryEntry) -> String {
        format!(
            r#"<a href="{}" class="{}" data-testid="SidebarSummary"{}><div class="SidebarSummary_icon"></div><div class="SidebarSummary_label">{}</div></a>"#,
            escape_html(&summary.target_address),
            classes("SidebarSummary", summary.is_current),
            aria_current(summary.is_current),
            escape_html(&summary.label)
        )
    }

    /// One step link with its connector lines and mode icon
    pub fn flow_step(entry: &SidebarEntry) -> String {
        let mode = entry.mode.as_str();
        format!(
            r#"<a href="{href}" class="{class}" data-key="{key}"{aria}><div class="SidebarFlowStep_icon">{top}<div class="FlowStepIcon {mode}"></div>{bottom}</div><div class="SidebarFlowStep_label {mode}">{label}</div></a>"#,
            href = escape_html(&entry.target_address),
            class = classes("SidebarFlowStep", entry.is_current),
            key = escape_html(&entry.key),
            aria = aria_current(entry.is_current),
            top = Self::connector_line(entry.is_first),
            bottom = Self::connector_line(entry.is_last),
            mode = mode,
            label = escape_html(&entry.label),
        )
    }

    fn connector_line(hidden: bool) -> &'static str {
        if hidden {
            r#"<div class="SidebarFlowStep_icon_line" style="background: transparent"></div>"#
        } else {
            r#"<div class="SidebarFlowStep_icon_line"></div>"#
        }
    }

    /// Main pane: summary heading or the selected step's scores
    pub fn content(content: &Content) -> String {
        match content {
            Content::Summary => r#"<h1 data-testid="Summary">SUMMARY</h1>"#.to_string(),
            Content::Report(report) => {
                let scores: String = report
                    .scores
                    .iter()
                    .map(|line| format!("<h2>{}</h2>", escape_html(line)))
                    .collect();
                format!(
                    r#"<div data-testid="Report" data-step="{}"><h1>{}</h1>{}</div>"#,
                    report.index,
                    escape_html(&report.url),
                    scores
                )
            }
        }
    }
}

fn classes(base: &str, is_current: bool) -> String {
    if is_current {
        format!("{} {}", base, CURRENT_CLASS)
    } else {
        base.to_string()
    }
}

fn aria_current(is_current: bool) -> &'static str {
    if is_current {
        r#" aria-current="page""#
    } else {
        ""
    }
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
