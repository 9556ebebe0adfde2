//! Subprocess-backed ADB provider

use super::{build_adb_args, AdbProvider, ExecOptions, ExecResult};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::debug;

/// Executes adb commands against the local adb binary.
pub struct LocalAdb {
    adb_path: String,
}

impl LocalAdb {
    pub fn new(adb_path: impl Into<String>) -> Self {
        Self {
            adb_path: adb_path.into(),
        }
    }
}

impl Default for LocalAdb {
    fn default() -> Self {
        Self::new("adb")
    }
}

#[async_trait]
impl AdbProvider for LocalAdb {
    async fn exec(&self, args: &[&str], options: &ExecOptions) -> ExecResult {
        let started = Instant::now();
        let full_args = build_adb_args(args, options.serial.as_deref());

        debug!(adb = %self.adb_path, args = ?full_args, "executing adb");

        let mut cmd = Command::new(&self.adb_path);
        for arg in &full_args {
            cmd.arg(arg);
        }

        let result =
            tokio::time::timeout(Duration::from_millis(options.timeout_ms), cmd.output()).await;

        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(Ok(output)) => ExecResult {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                duration_ms,
            },
            Ok(Err(e)) => ExecResult {
                exit_code: -1,
                stdout: String::new(),
                stderr: e.to_string(),
                duration_ms,
            },
            Err(_) => ExecResult {
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Timed out after {}ms", options.timeout_ms),
                duration_ms,
            },
        }
    }
}
