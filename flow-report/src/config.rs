use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{FlowReportError, Result};

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_FILE: &str = "flow-report.toml";

/// Query parameter carrying the selected step
pub const DEFAULT_STEP_PARAM: &str = "step";

/// Title shown in the sidebar header
pub const DEFAULT_TITLE: &str = "Lighthouse User Flow Report";

/// Main configuration structure for flow report rendering
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FlowReportConfig {
    /// Report presentation settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Address encoding settings
    #[serde(default)]
    pub address: AddressConfig,
}

/// Report presentation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

/// Address encoding settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AddressConfig {
    /// Name of the query parameter holding the step index
    #[serde(default = "default_step_param")]
    pub param: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_step_param() -> String {
    DEFAULT_STEP_PARAM.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            param: default_step_param(),
        }
    }
}

impl FlowReportConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| FlowReportError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FlowReportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, fall back to defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let param = &self.address.param;
        if param.trim().is_empty() {
            return Err(FlowReportError::invalid_config(
                "address.param must not be empty",
            ));
        }

        if !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(FlowReportError::invalid_config(format!(
                "address.param '{}' may only contain letters, digits, '_' and '-'",
                param
            )));
        }

        Ok(())
    }
}
