//! Lightweight execution traces for observability
//!
//! Every command records the adb calls it made; the finished trace is
//! attached to the outcome so `--json` consumers can see exactly what ran.

use serde::Serialize;
use std::time::Instant;

/// One recorded adb invocation.
#[derive(Debug, Clone, Serialize)]
pub struct AdbCall {
    pub args: Vec<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Completed trace of a single command execution.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionTrace {
    pub command: String,
    pub duration_ms: u64,
    pub adb_calls: Vec<AdbCall>,
    pub errors: Vec<String>,
}

/// Accumulates adb calls while a command runs.
#[derive(Debug)]
pub struct TraceBuilder {
    command: String,
    started: Instant,
    adb_calls: Vec<AdbCall>,
    errors: Vec<String>,
}

impl TraceBuilder {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            started: Instant::now(),
            adb_calls: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn record_call(&mut self, args: &[&str], duration_ms: u64, exit_code: i32) {
        self.adb_calls.push(AdbCall {
            args: args.iter().map(|s| s.to_string()).collect(),
            duration_ms,
            exit_code: Some(exit_code),
            error: None,
        });
    }

    pub fn record_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn finish(self) -> ExecutionTrace {
        ExecutionTrace {
            command: self.command,
            duration_ms: self.started.elapsed().as_millis() as u64,
            adb_calls: self.adb_calls,
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_records_calls_in_order() {
        let mut trace = TraceBuilder::new("tap");
        trace.record_call(&["shell", "input", "tap", "10", "20"], 42, 0);
        trace.record_call(&["devices", "-l"], 7, 0);

        let finished = trace.finish();
        assert_eq!(finished.command, "tap");
        assert_eq!(finished.adb_calls.len(), 2);
        assert_eq!(finished.adb_calls[0].args[2], "tap");
        assert_eq!(finished.adb_calls[1].args[0], "devices");
        assert!(finished.errors.is_empty());
    }

    #[test]
    fn test_trace_records_errors() {
        let mut trace = TraceBuilder::new("screenshot");
        trace.record_error("pull failed");
        let finished = trace.finish();
        assert_eq!(finished.errors, vec!["pull failed"]);
    }
}
