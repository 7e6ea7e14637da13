//! Which step is selected, derived from the document address

use crate::address::{AddressCodec, QueryStepCodec};
use crate::error::Result;
use crate::location::{Location, Subscription};
use crate::types::{FlowResult, Step};
use serde::Serialize;
use std::rc::Rc;
use url::Url;

/// The selected step together with its position in the flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentStep<'a> {
    pub index: usize,
    pub step: &'a Step,
}

/// What the main pane is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "index", rename_all = "snake_case")]
pub enum Selection {
    /// Aggregate view over the whole flow
    Summary,
    /// Detail view of one step
    StepSelected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Summary => None,
            Self::StepSelected(index) => Some(*index),
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

impl From<Option<CurrentStep<'_>>> for Selection {
    fn from(current: Option<CurrentStep<'_>>) -> Self {
        match current {
            Some(current) => Self::StepSelected(current.index),
            None => Self::Summary,
        }
    }
}

/// Resolve an address against a flow.
///
/// Malformed selections and indices outside the flow both resolve to `None`,
/// meaning the summary is shown.
pub fn resolve<'a, C>(flow: &'a FlowResult, codec: &C, address: &Url) -> Option<CurrentStep<'a>>
where
    C: AddressCodec + ?Sized,
{
    match try_resolve(flow, codec, address) {
        Ok(current) => current,
        Err(err) => {
            log::warn!("Ignoring selection in {}: {}", address, err);
            None
        }
    }
}

/// Resolve an address, reporting a malformed selection as an error.
///
/// Out of range indices are still `Ok(None)`.
pub fn try_resolve<'a, C>(
    flow: &'a FlowResult,
    codec: &C,
    address: &Url,
) -> Result<Option<CurrentStep<'a>>>
where
    C: AddressCodec + ?Sized,
{
    let Some(raw) = codec.decode(address)? else {
        return Ok(None);
    };

    let current = usize::try_from(raw)
        .ok()
        .and_then(|index| flow.steps.get(index).map(|step| CurrentStep { index, step }));

    if current.is_none() {
        log::debug!("Step {} is outside a flow of {} steps", raw, flow.len());
    }
    Ok(current)
}

/// Read model combining the flow with the address codec
#[derive(Debug, Clone)]
pub struct NavigationState<C = QueryStepCodec> {
    flow: Rc<FlowResult>,
    codec: C,
}

impl NavigationState<QueryStepCodec> {
    /// Navigation over the default `?step=` encoding
    pub fn with_default_codec(flow: Rc<FlowResult>) -> Self {
        Self::new(flow, QueryStepCodec::new())
    }
}

impl<C: AddressCodec> NavigationState<C> {
    pub fn new(flow: Rc<FlowResult>, codec: C) -> Self {
        Self { flow, codec }
    }

    pub fn flow(&self) -> &FlowResult {
        &self.flow
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Currently selected step for `address`, `None` for the summary
    pub fn resolve(&self, address: &Url) -> Option<CurrentStep<'_>> {
        resolve(&self.flow, &self.codec, address)
    }

    /// Like [`resolve`](Self::resolve) but fails on a corrupted selection
    pub fn try_resolve(&self, address: &Url) -> Result<Option<CurrentStep<'_>>> {
        try_resolve(&self.flow, &self.codec, address)
    }

    pub fn selection(&self, address: &Url) -> Selection {
        self.resolve(address).into()
    }

    /// Follow a location, calling `on_change` with the resolved step now and
    /// after every address change until the subscription is dropped.
    #[must_use = "dropping the subscription stops updates"]
    pub fn watch<F>(&self, location: &Location, on_change: F) -> Subscription
    where
        C: Clone + 'static,
        F: Fn(Option<CurrentStep<'_>>) + 'static,
    {
        on_change(self.resolve(&location.current()));

        let flow = Rc::clone(&self.flow);
        let codec = self.codec.clone();
        location.subscribe(move |address| {
            on_change(resolve(&flow, &codec, address));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowReportError;
    use crate::types::GatherMode;
    use std::cell::RefCell;

    fn step(mode: GatherMode, fetch_time: &str, url: &str) -> Step {
        Step {
            gather_mode: mode,
            fetch_time: fetch_time.parse().unwrap(),
            final_url: url.to_string(),
            categories: vec![],
            config_settings: Default::default(),
        }
    }

    fn flow() -> Rc<FlowResult> {
        Rc::new(
            FlowResult::new(vec![
                step(GatherMode::Navigation, "2021-08-03T18:28:13.296Z", "https://a.test/"),
                step(GatherMode::Timespan, "2021-08-03T18:28:31.789Z", "https://a.test/search"),
                step(GatherMode::Snapshot, "2021-08-03T18:28:44.109Z", "https://a.test/search"),
            ])
            .unwrap(),
        )
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_resolves_selected_step() {
        let flow = flow();
        let state = NavigationState::with_default_codec(Rc::clone(&flow));
        let current = state.resolve(&url("file:///Users/example/report.html?step=1")).unwrap();

        assert_eq!(current.index, 1);
        assert_eq!(current.step, &flow.steps[1]);
    }

    #[test]
    fn test_missing_selection_is_summary() {
        let state = NavigationState::with_default_codec(flow());
        assert!(state.resolve(&url("file:///Users/example/report.html")).is_none());
        assert_eq!(state.selection(&url("file:///Users/example/report.html")), Selection::Summary);
    }

    #[test]
    fn test_out_of_range_is_summary() {
        let state = NavigationState::with_default_codec(flow());
        assert!(state.resolve(&url("file:///r.html?step=5")).is_none());
        assert!(state.resolve(&url("file:///r.html?step=3")).is_none());
        assert!(state.resolve(&url("file:///r.html?step=-1")).is_none());
        assert!(state.try_resolve(&url("file:///r.html?step=5")).unwrap().is_none());
    }

    #[test]
    fn test_malformed_selection() {
        let state = NavigationState::with_default_codec(flow());
        let address = url("file:///r.html?step=OHNO");

        assert!(state.resolve(&address).is_none());
        assert!(matches!(
            state.try_resolve(&address),
            Err(FlowReportError::MalformedStep { .. })
        ));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let state = NavigationState::with_default_codec(flow());
        let address = url("file:///r.html?step=2");
        assert_eq!(state.resolve(&address), state.resolve(&address));
    }

    #[test]
    fn test_watch_follows_location() {
        let state = NavigationState::with_default_codec(flow());
        let location = Location::new(url("file:///r.html"));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let recorder = Rc::clone(&seen);
        let subscription = state.watch(&location, move |current| {
            recorder.borrow_mut().push(Selection::from(current));
        });

        location.navigate(url("file:///r.html?step=0"));
        location.navigate(url("file:///r.html?step=2"));
        location.navigate(url("file:///r.html"));
        drop(subscription);
        location.navigate(url("file:///r.html?step=1"));

        assert_eq!(
            *seen.borrow(),
            vec![
                Selection::Summary,
                Selection::StepSelected(0),
                Selection::StepSelected(2),
                Selection::Summary,
            ]
        );
    }
}
