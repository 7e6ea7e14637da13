//! Main pane content: the flow summary or one step's report

use crate::labeler::{label_steps, UNKNOWN_LABEL};
use crate::navigation::CurrentStep;
use crate::types::{Category, FlowResult, GatherMode};
use serde::Serialize;

/// Detail view of a single step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub label: String,
    pub mode: GatherMode,
    pub url: String,
    /// "<category id>: <score>" in report order
    pub scores: Vec<String>,
}

/// What the main pane renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Content {
    Summary,
    Report(StepReport),
}

impl Content {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

/// Format a category score the way the report prints numbers: `1`, `0.99`, empty when unscored
pub fn format_score(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

/// "<id>: <score>" line for one category
pub fn score_line(category: &Category) -> String {
    format!("{}: {}", category.id, format_score(category.score))
}

/// Picks between the summary and the detail view
pub struct ContentSwitcher;

impl ContentSwitcher {
    pub fn switch(flow: &FlowResult, current: Option<CurrentStep<'_>>) -> Content {
        let Some(current) = current else {
            return Content::Summary;
        };

        let label = label_steps(&flow.steps)
            .into_iter()
            .nth(current.index)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        Content::Report(StepReport {
            index: current.index,
            label,
            mode: current.step.gather_mode,
            url: current.step.final_url.clone(),
            scores: current.step.categories.iter().map(score_line).collect(),
        })
    }
}
