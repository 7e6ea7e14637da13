//! Sidebar entries for jumping between the steps of a flow

use crate::address::{AddressCodec, QueryStepCodec};
use crate::config::{FlowReportConfig, DEFAULT_TITLE};
use crate::labeler::label_steps;
use crate::navigation::Selection;
use crate::types::{ConfigSettings, FlowResult, GatherMode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// Label of the permanent summary link
pub const SUMMARY_LABEL: &str = "Summary";

/// One navigable step in the sidebar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub index: usize,
    pub label: String,
    pub mode: GatherMode,
    /// Identity of the underlying step
    pub key: String,
    /// Complete address selecting this step
    pub target_address: String,
    /// No connector line above the first entry
    pub is_first: bool,
    /// No connector line below the last entry
    pub is_last: bool,
    pub is_current: bool,
}

/// Link back to the summary view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub label: String,
    pub target_address: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarHeader {
    pub title: String,
    /// Capture date of the first step
    pub date: String,
}

/// Display summary of the settings the flow was captured with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeSettings {
    /// "<height>x<width>px | <form factor>"
    pub summary: String,
    pub emulated_user_agent: Option<String>,
    pub channel: Option<String>,
}

impl RuntimeSettings {
    pub fn from_settings(settings: &ConfigSettings) -> Self {
        let emulation = &settings.screen_emulation;
        Self {
            summary: format!(
                "{}x{}px | {}",
                emulation.height,
                emulation.width,
                settings.form_factor.as_deref().unwrap_or("unknown")
            ),
            emulated_user_agent: settings.emulated_user_agent.clone(),
            channel: settings.channel.clone(),
        }
    }
}

/// Everything the sidebar shows for one address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub header: SidebarHeader,
    pub runtime_settings: Option<RuntimeSettings>,
    pub summary: SummaryEntry,
    pub steps: Vec<SidebarEntry>,
}

impl Sidebar {
    /// The step entry marked current, if any
    pub fn current_step(&self) -> Option<&SidebarEntry> {
        self.steps.iter().find(|entry| entry.is_current)
    }
}

/// Format a capture time for the sidebar header, e.g. "Aug 3, 2021, 6:28 PM UTC"
pub fn format_capture_date(time: &DateTime<Utc>) -> String {
    time.format("%b %-d, %Y, %-I:%M %p UTC").to_string()
}

/// Builds sidebar entries from a flow and the current address
#[derive(Debug, Clone)]
pub struct SidebarController<C = QueryStepCodec> {
    codec: C,
    title: String,
}

impl SidebarController<QueryStepCodec> {
    pub fn new() -> Self {
        Self::with_codec(QueryStepCodec::new())
    }

    pub fn from_config(config: &FlowReportConfig) -> Self {
        Self::with_codec(QueryStepCodec::from_config(config)).with_title(config.report.title.clone())
    }
}

impl Default for SidebarController<QueryStepCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AddressCodec> SidebarController<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// One entry per step, in flow order
    pub fn build_entries(&self, flow: &FlowResult, address: &Url, selection: Selection) -> Vec<SidebarEntry> {
        let labels = label_steps(&flow.steps);
        let last = flow.len().saturating_sub(1);

        flow.iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (step, label))| SidebarEntry {
                index,
                label,
                mode: step.gather_mode,
                key: step.key(),
                target_address: self.codec.encode(address, Some(index)).to_string(),
                is_first: index == 0,
                is_last: index == last,
                is_current: selection.index() == Some(index),
            })
            .collect()
    }

    /// Current address with the selection removed
    pub fn to_summary_address(&self, address: &Url) -> Url {
        self.codec.clear(address)
    }

    pub fn summary_entry(&self, address: &Url, selection: Selection) -> SummaryEntry {
        SummaryEntry {
            label: SUMMARY_LABEL.to_string(),
            target_address: self.to_summary_address(address).to_string(),
            is_current: selection.is_summary(),
        }
    }

    /// Full sidebar model: header, runtime settings, summary link and steps
    pub fn sidebar(&self, flow: &FlowResult, address: &Url, selection: Selection) -> Sidebar {
        let first = flow.first();

        Sidebar {
            header: SidebarHeader {
                title: self.title.clone(),
                date: first
                    .map(|step| format_capture_date(&step.fetch_time))
                    .unwrap_or_default(),
            },
            runtime_settings: first.map(|step| RuntimeSettings::from_settings(&step.config_settings)),
            summary: self.summary_entry(address, selection),
            steps: self.build_entries(flow, address, selection),
        }
    }
}
