//! Per-mode sequence labels such as "Navigation (1)" and "Timespan (2)"

use crate::types::{GatherMode, Step};

/// Label used for steps whose mode has no display name
pub const UNKNOWN_LABEL: &str = "?";

/// Running ordinal for each labelled gather mode
#[derive(Debug, Clone, Copy)]
struct ModeCounters {
    navigation: usize,
    timespan: usize,
    snapshot: usize,
}

impl ModeCounters {
    fn new() -> Self {
        Self {
            navigation: 1,
            timespan: 1,
            snapshot: 1,
        }
    }

    /// Take the next ordinal for a mode, `None` for unknown modes
    fn next(&mut self, mode: GatherMode) -> Option<usize> {
        let counter = match mode {
            GatherMode::Navigation => &mut self.navigation,
            GatherMode::Timespan => &mut self.timespan,
            GatherMode::Snapshot => &mut self.snapshot,
            GatherMode::Unknown => return None,
        };
        let ordinal = *counter;
        *counter += 1;
        Some(ordinal)
    }
}

/// Label a sequence of gather modes, numbering each mode independently
pub fn label_modes<I>(modes: I) -> Vec<String>
where
    I: IntoIterator<Item = GatherMode>,
{
    let mut counters = ModeCounters::new();
    modes
        .into_iter()
        .map(|mode| match (mode.display_name(), counters.next(mode)) {
            (Some(name), Some(ordinal)) => format!("{} ({})", name, ordinal),
            _ => {
                log::warn!("No label for gather mode '{}', using fallback", mode);
                UNKNOWN_LABEL.to_string()
            }
        })
        .collect()
}

/// Label every step of a flow in capture order
pub fn label_steps(steps: &[Step]) -> Vec<String> {
    label_modes(steps.iter().map(|step| step.gather_mode))
}
