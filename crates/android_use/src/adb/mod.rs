//! ADB execution providers
//!
//! This module provides:
//! - `AdbProvider`: the seam between commands and the adb binary
//! - `local`: subprocess-backed provider using tokio
//! - `mock`: scripted provider for tests

mod local;
mod mock;

pub use local::LocalAdb;
pub use mock::{MockAdb, MockResponse, MOCK_DEVICES_RESPONSE, MOCK_NO_DEVICES_RESPONSE};

use async_trait::async_trait;

/// Options for a single adb invocation.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Target device serial (prepends -s)
    pub serial: Option<String>,
}

/// Raw result of one adb invocation.
///
/// Providers never fail at the Rust level; spawn errors and timeouts
/// surface as `exit_code: -1` with the reason in `stderr`, so commands
/// apply one uniform failure path.
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Abstraction over adb execution.
#[async_trait]
pub trait AdbProvider: Send + Sync {
    /// Execute an adb command (args without the leading `adb`).
    async fn exec(&self, args: &[&str], options: &ExecOptions) -> ExecResult;
}

/// Build the full argument list, inserting `-s <serial>` when targeted.
pub fn build_adb_args(args: &[&str], serial: Option<&str>) -> Vec<String> {
    let mut full = Vec::with_capacity(args.len() + 2);
    if let Some(s) = serial {
        full.push("-s".to_string());
        full.push(s.to_string());
    }
    full.extend(args.iter().map(|a| a.to_string()));
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_without_serial() {
        assert_eq!(build_adb_args(&["devices", "-l"], None), vec!["devices", "-l"]);
    }

    #[test]
    fn test_build_args_with_serial() {
        assert_eq!(
            build_adb_args(&["shell", "input", "tap"], Some("emulator-5554")),
            vec!["-s", "emulator-5554", "shell", "input", "tap"]
        );
    }
}
