//! Scripted ADB provider for tests

use super::{build_adb_args, AdbProvider, ExecOptions, ExecResult};
use async_trait::async_trait;
use std::sync::Mutex;

/// Canned response for a command pattern.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

impl MockResponse {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    pub fn fail(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Mock adb provider: matches each call's full argument string against
/// registered substring patterns and records the call history.
#[derive(Default)]
pub struct MockAdb {
    responses: Mutex<Vec<(String, MockResponse)>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockAdb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for commands whose joined args contain `pattern`.
    /// First registered match wins.
    pub fn respond(self, pattern: impl Into<String>, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push((pattern.into(), response));
        self
    }

    /// All calls made so far, each as the full argument vector.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// True if any recorded call's joined args contain `pattern`.
    pub fn was_called(&self, pattern: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|args| args.join(" ").contains(pattern))
    }
}

#[async_trait]
impl AdbProvider for MockAdb {
    async fn exec(&self, args: &[&str], options: &ExecOptions) -> ExecResult {
        let full_args = build_adb_args(args, options.serial.as_deref());
        let pattern = full_args.join(" ");
        self.calls.lock().unwrap().push(full_args);

        let response = self
            .responses
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| pattern.contains(key.as_str()))
            .map(|(_, r)| r.clone())
            .unwrap_or_default();

        ExecResult {
            exit_code: response.exit_code,
            stdout: response.stdout,
            stderr: response.stderr,
            duration_ms: 0,
        }
    }
}

/// Device listing with an emulator and a network device.
pub const MOCK_DEVICES_RESPONSE: &str = "List of devices attached\n\
    emulator-5554\tdevice product:sdk_gphone64_arm64 model:sdk_gphone64_arm64 device:emu64a transport_id:1\n\
    192.168.1.100:5555\tdevice product:flame model:Pixel_4 device:flame transport_id:2\n";

/// Device listing with nothing attached.
pub const MOCK_NO_DEVICES_RESPONSE: &str = "List of devices attached\n\n";
