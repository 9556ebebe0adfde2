//! Runtime configuration shared by all commands

use serde::{Deserialize, Serialize};

/// Output rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for ADB command execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the adb executable
    pub adb_path: String,
    /// Default timeout for adb operations (ms)
    pub timeout_ms: u64,
    /// Max retries for transient failures
    pub max_retries: u32,
    /// Output format
    pub output_format: OutputFormat,
    /// Verbose logging
    pub verbose: bool,
    /// Default device serial (None = auto-select)
    pub default_serial: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adb_path: "adb".to_string(),
            timeout_ms: 15_000,
            max_retries: 1,
            output_format: OutputFormat::Text,
            verbose: false,
            default_serial: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adb_path(mut self, path: impl Into<String>) -> Self {
        self.adb_path = path.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_default_serial(mut self, serial: impl Into<String>) -> Self {
        self.default_serial = Some(serial.into());
        self
    }
}
