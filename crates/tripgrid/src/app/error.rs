use serde::Serialize;
use tripgrid_common::error_codes::exit_codes;
use tripgrid_domain::GridError;

use crate::adapters::OutputFormat;
use crate::usecases::LoadedInput;
use crate::usecases::RenderError;

/// Terminal error with everything needed to report it and pick an exit code.
#[derive(Debug)]
pub struct CliError {
    pub exit_code: i32,
    pub format: OutputFormat,
    pub message: String,
    pub suggestion: Option<String>,
    pub json: Option<String>,
}

impl CliError {
    pub fn new(
        format: OutputFormat,
        message: impl Into<String>,
        suggestion: Option<String>,
        exit_code: i32,
    ) -> Self {
        Self {
            exit_code,
            format,
            message: message.into(),
            suggestion,
            json: None,
        }
    }

    /// `loaded` is the input read before the failure, when the failure came later.
    pub fn from_render_error(
        error: &RenderError,
        loaded: Option<&LoadedInput>,
        format: OutputFormat,
    ) -> Self {
        let payload = RenderErrorPayload::from_error(error, loaded);
        Self {
            exit_code: error.category().exit_code(),
            format,
            message: error.to_string(),
            suggestion: Some(error.suggestion()),
            json: serde_json::to_string_pretty(&payload).ok(),
        }
    }

    pub fn general(format: OutputFormat, message: impl Into<String>) -> Self {
        Self::new(format, message, None, exit_codes::GENERAL_ERROR)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

#[derive(Debug, Clone, Serialize)]
pub struct RenderErrorPayload {
    pub success: bool,
    pub code: &'static str,
    pub message: String,
    pub category: &'static str,
    pub retryable: bool,
    pub context: RenderErrorContext,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputSummary>,
}

/// Fingerprint and token count of input that was read before the run failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub fingerprint: String,
    pub token_count: usize,
}

impl InputSummary {
    fn from_loaded(loaded: &LoadedInput) -> Self {
        Self {
            path: loaded.input.display().to_string(),
            fingerprint: loaded.fingerprint.to_string(),
            token_count: loaded.token_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderErrorContext {
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl RenderErrorPayload {
    pub fn from_error(error: &RenderError, loaded: Option<&LoadedInput>) -> Self {
        Self {
            success: false,
            code: error.kind(),
            message: error.to_string(),
            category: error.category().as_str(),
            retryable: error.is_retryable(),
            context: RenderErrorContext::from_error(error),
            suggestion: error.suggestion(),
            input: loaded.map(InputSummary::from_loaded),
        }
    }
}

impl RenderErrorContext {
    fn from_error(error: &RenderError) -> Self {
        match error {
            RenderError::Source(e) => Self {
                stage: e.operation(),
                path: Some(e.path().display().to_string()),
            },
            RenderError::Grid(GridError::EmptyInput | GridError::TooLarge { .. }) => Self {
                stage: "render",
                path: None,
            },
            RenderError::Grid(_) => Self {
                stage: "parse",
                path: None,
            },
            RenderError::Sink(e) => Self {
                stage: "write",
                path: Some(e.path().display().to_string()),
            },
        }
    }
}
