//! HTML page template with embedded CSS for self-contained reports

use super::components::{escape_html, HtmlComponents};
use crate::app::FlowView;

/// HTML template generator for flow reports
pub struct HtmlTemplate;

impl HtmlTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete HTML page
    pub fn render(&self, view: &FlowView, include_styles: bool) -> String {
        let styles = if include_styles {
            format!("<style>{}</style>", Self::embedded_css())
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {styles}
</head>
<body>
    <div class="App">
        {sidebar}
        <main class="Content" role="main">
            {content}
        </main>
    </div>
</body>
</html>"#,
            title = escape_html(&view.sidebar.header.title),
            styles = styles,
            sidebar = HtmlComponents::sidebar(&view.sidebar),
            content = HtmlComponents::content(&view.content),
        )
    }

    fn embedded_css() -> &'static str {
        r#"
        :root {
            --color-sidebar: #f8f9fa;
            --color-current: #e8f0fe;
            --color-line: #dadce0;
            --color-text: #202124;
            --color-muted: #5f6368;
            --color-navigation: #1a73e8;
            --color-timespan: #e37400;
            --color-snapshot: #188038;
        }
        body { margin: 0; font-family: system-ui, sans-serif; color: var(--color-text); }
        .App { display: flex; min-height: 100vh; }
        .Sidebar { width: 280px; background: var(--color-sidebar); padding: 16px 0; }
        .SidebarHeader { padding: 0 16px 12px; }
        .SidebarHeader_title { font-weight: 600; }
        .SidebarHeader_date { color: var(--color-muted); font-size: 12px; }
        .SidebarSectionTitle { padding: 8px 16px; font-size: 11px; color: var(--color-muted); letter-spacing: 0.05em; }
        .Separator { height: 1px; background: var(--color-line); }
        .SidebarRuntimeSettings { padding: 8px 16px; font-size: 13px; }
        .SidebarSummary, .SidebarFlowStep { display: flex; align-items: center; padding: 0 16px; color: inherit; text-decoration: none; }
        .SidebarSummary { height: 40px; }
        .Sidebar_current { background: var(--color-current); font-weight: 600; }
        .SidebarFlowStep_icon { display: flex; flex-direction: column; align-items: center; width: 24px; margin-right: 8px; }
        .SidebarFlowStep_icon_line { width: 2px; height: 12px; background: var(--color-line); }
        .FlowStepIcon { width: 12px; height: 12px; border-radius: 50%; }
        .FlowStepIcon.navigation { background: var(--color-navigation); }
        .FlowStepIcon.timespan { background: var(--color-timespan); }
        .FlowStepIcon.snapshot { background: var(--color-snapshot); }
        .FlowStepIcon.unknown { background: var(--color-muted); }
        .Content { flex: 1; padding: 24px 32px; }
        "#
    }
}

impl Default for HtmlTemplate {
    fn default() -> Self {
        Self::new()
    }
}
