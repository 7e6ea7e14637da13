//! Composition of navigation, sidebar and content into one view per address

use crate::address::{AddressCodec, QueryStepCodec};
use crate::config::FlowReportConfig;
use crate::content::{Content, ContentSwitcher};
use crate::error::Result;
use crate::location::{Location, Subscription};
use crate::navigation::{CurrentStep, NavigationState, Selection};
use crate::sidebar::{Sidebar, SidebarController};
use crate::types::FlowResult;
use serde::Serialize;
use std::rc::Rc;
use url::Url;

/// Everything needed to render the report for one address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowView {
    pub address: String,
    pub selection: Selection,
    pub sidebar: Sidebar,
    pub content: Content,
}

/// A loaded flow report
#[derive(Debug, Clone)]
pub struct FlowApp<C = QueryStepCodec> {
    navigation: NavigationState<C>,
    sidebar: SidebarController<C>,
}

impl FlowApp<QueryStepCodec> {
    pub fn new(flow: FlowResult) -> Self {
        Self::from_config(flow, &FlowReportConfig::default())
    }

    pub fn from_config(flow: FlowResult, config: &FlowReportConfig) -> Self {
        Self {
            navigation: NavigationState::new(Rc::new(flow), QueryStepCodec::from_config(config)),
            sidebar: SidebarController::from_config(config),
        }
    }
}

impl<C: AddressCodec + Clone> FlowApp<C> {
    pub fn with_codec(flow: FlowResult, codec: C) -> Self {
        Self {
            navigation: NavigationState::new(Rc::new(flow), codec.clone()),
            sidebar: SidebarController::with_codec(codec),
        }
    }

    pub fn flow(&self) -> &FlowResult {
        self.navigation.flow()
    }

    pub fn navigation(&self) -> &NavigationState<C> {
        &self.navigation
    }

    pub fn sidebar_controller(&self) -> &SidebarController<C> {
        &self.sidebar
    }

    /// View for an address, showing the summary for malformed selections
    pub fn view(&self, address: &Url) -> FlowView {
        self.build_view(address, self.navigation.resolve(address))
    }

    /// View for an address, failing on malformed selections
    pub fn try_view(&self, address: &Url) -> Result<FlowView> {
        let current = self.navigation.try_resolve(address)?;
        Ok(self.build_view(address, current))
    }

    /// Re-render on every address change until the subscription is dropped
    #[must_use = "dropping the subscription stops updates"]
    pub fn watch<F>(&self, location: &Location, on_view: F) -> Subscription
    where
        C: 'static,
        F: Fn(FlowView) + 'static,
    {
        let app = self.clone();
        on_view(app.view(&location.current()));
        location.subscribe(move |address| on_view(app.view(address)))
    }

    fn build_view(&self, address: &Url, current: Option<CurrentStep<'_>>) -> FlowView {
        let selection = Selection::from(current);
        log::debug!("Rendering {:?} for {}", selection, address);

        FlowView {
            address: address.to_string(),
            selection,
            sidebar: self.sidebar.sidebar(self.flow(), address, selection),
            content: ContentSwitcher::switch(self.flow(), current),
        }
    }
}
