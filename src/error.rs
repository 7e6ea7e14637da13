use flow_report::FlowReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Flow report error: {0}")]
    Report(#[from] FlowReportError),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Report(err) => Self::report_message(err),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }

    fn report_message(err: &FlowReportError) -> String {
        match err {
            FlowReportError::FlowNotFound { path } => format!("Flow file not found: {}", path.display()),
            FlowReportError::ConfigNotFound { path } => format!("Configuration file not found: {}", path.display()),
            FlowReportError::MalformedStep { param, value } => {
                format!("Address selects step '{value}' through '{param}', which is not a step index")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_step_message() {
        let err: CliError = FlowReportError::malformed_step("step", "OHNO").into();
        assert!(err.user_message().contains("'OHNO'"));
    }

    #[test]
    fn test_context_is_prefixed() {
        let result: std::result::Result<(), FlowReportError> = Err(FlowReportError::EmptyFlow);
        let err = result.with_context(|| "Failed to load flow").unwrap_err();
        assert_eq!(err.user_message(), "Failed to load flow: Flow contains no steps");
    }
}
