//! tap command - tap at coordinates

use super::CommandContext;
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TapInput {
    pub x: u32,
    pub y: u32,
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TapOutput {
    pub x: u32,
    pub y: u32,
}

pub async fn tap(ctx: &CommandContext, input: &TapInput) -> Outcome {
    let mut trace = TraceBuilder::new("tap");

    let x = input.x.to_string();
    let y = input.y.to_string();
    let args = ["shell", "input", "tap", x.as_str(), y.as_str()];

    let options = ctx.options(input.serial.as_deref());
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    if !result.success() {
        let message = if result.stderr.is_empty() {
            "Tap failed".to_string()
        } else {
            result.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    Outcome::ok(TapOutput {
        x: input.x,
        y: input.y,
    })
    .with_message(format!("Tapped at ({}, {})", input.x, input.y))
    .with_trace(trace.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adb::{MockAdb, MockResponse};
    use crate::config::Config;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_tap_success() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let input = TapInput {
            x: 500,
            y: 800,
            serial: None,
        };
        let outcome = tap(&ctx, &input).await;
        assert!(outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Tapped at (500, 800)"));
        assert!(mock.was_called("shell input tap 500 800"));
    }

    #[tokio::test]
    async fn test_tap_targets_serial() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let input = TapInput {
            x: 1,
            y: 2,
            serial: Some("emulator-5554".to_string()),
        };
        tap(&ctx, &input).await;
        assert!(mock.was_called("-s emulator-5554 shell input tap 1 2"));
    }

    #[tokio::test]
    async fn test_tap_failure() {
        let mock = MockAdb::new().respond("input tap", MockResponse::fail(1, "no devices"));
        let ctx = CommandContext::new(Arc::new(mock), Config::default());
        let input = TapInput {
            x: 10,
            y: 10,
            serial: None,
        };
        let outcome = tap(&ctx, &input).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.unwrap().code, "ADB_FAILED");
    }
}
