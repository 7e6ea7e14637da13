use thiserror::Error;
use std::path::PathBuf;

/// Result type alias for flow-report operations
pub type Result<T> = std::result::Result<T, FlowReportError>;

/// Error types for loading flows and resolving report addresses
#[derive(Debug, Error)]
pub enum FlowReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Flow JSON parse error: {0}")]
    FlowParse(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Flow file not found: {path}")]
    FlowNotFound { path: PathBuf },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Flow contains no steps")]
    EmptyFlow,

    #[error("Malformed '{param}' value in address: '{value}' is not an integer")]
    MalformedStep { param: String, value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl FlowReportError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new malformed step error
    pub fn malformed_step<P: Into<String>, V: Into<String>>(param: P, value: V) -> Self {
        Self::MalformedStep {
            param: param.into(),
            value: value.into(),
        }
    }
}
