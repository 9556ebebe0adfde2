//! Structured command outcomes
//!
//! Every command returns an [`Outcome`]: success or a coded error, an
//! optional data payload, warnings, and the execution trace. The text and
//! JSON formatters both render this one shape.

use crate::error::AdbError;
use crate::trace::ExecutionTrace;
use serde::Serialize;

/// Coded error embedded in a failed outcome.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeError {
    pub code: String,
    pub message: String,
}

/// Result of one command execution.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OutcomeError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<ExecutionTrace>,
}

impl Outcome {
    /// Successful outcome with a serializable data payload.
    pub fn ok<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            exit_code: 0,
            message: None,
            data: serde_json::to_value(data).ok(),
            error: None,
            warnings: Vec::new(),
            trace: None,
        }
    }

    /// Failed outcome with a machine-readable code.
    pub fn err(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: 1,
            message: None,
            data: None,
            error: Some(OutcomeError {
                code: code.to_string(),
                message: message.into(),
            }),
            warnings: Vec::new(),
            trace: None,
        }
    }

    /// Failed outcome derived from an [`AdbError`].
    pub fn from_error(error: &AdbError) -> Self {
        Self::err(error.code(), error.to_string())
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_trace(mut self, trace: ExecutionTrace) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }
}
