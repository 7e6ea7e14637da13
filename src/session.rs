use crate::cli::InputArgs;
use crate::error::{Result, ResultExt};
use crate::ui;
use flow_report::config::DEFAULT_CONFIG_FILE;
use flow_report::{parse_address, FlowApp, FlowReportConfig, FlowResult};
use std::path::Path;
use url::Url;

/// Everything a command needs: the loaded flow wired to its configuration, and the address to view
pub struct Session {
    pub app: FlowApp,
    pub address: Url,
}

impl Session {
    pub fn open(input: &InputArgs) -> Result<Self> {
        let config = load_config(input.config.as_deref())?;

        if input.verbose {
            ui::status_message(&format!("Loading flow from {}", input.flow));
        }
        let flow = FlowResult::load_from_file(&input.flow)
            .with_context(|| format!("Failed to load flow '{}'", input.flow))?;
        log::debug!("Loaded {} steps from {}", flow.len(), input.flow);

        let address = parse_address(&input.address)
            .with_context(|| format!("Invalid address '{}'", input.address))?;

        Ok(Self {
            app: FlowApp::from_config(flow, &config),
            address,
        })
    }
}

/// An explicit path must exist; the default file is optional
fn load_config(path: Option<&str>) -> Result<FlowReportConfig> {
    match path {
        Some(path) => FlowReportConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration '{}'", path)),
        None => FlowReportConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("Failed to load configuration '{}'", DEFAULT_CONFIG_FILE)),
    }
}
