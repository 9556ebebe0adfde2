//! screenshot command - capture the device screen to a local file

use super::CommandContext;
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

const DEVICE_PATH: &str = "/sdcard/screenshot.png";

#[derive(Debug, Clone)]
pub struct ScreenshotInput {
    /// Local output path
    pub output: String,
    pub serial: Option<String>,
}

impl Default for ScreenshotInput {
    fn default() -> Self {
        Self {
            output: "./screenshot.png".to_string(),
            serial: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScreenshotOutput {
    pub path: String,
    pub byte_size: u64,
}

pub async fn screenshot(ctx: &CommandContext, input: &ScreenshotInput) -> Outcome {
    let mut trace = TraceBuilder::new("screenshot");
    let options = ctx.options(input.serial.as_deref());

    let args = ["shell", "screencap", "-p", DEVICE_PATH];
    let cap = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, cap.duration_ms, cap.exit_code);

    if !cap.success() {
        let message = if cap.stderr.is_empty() {
            "Screenshot capture failed".to_string()
        } else {
            cap.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    let args = ["pull", DEVICE_PATH, input.output.as_str()];
    let pull = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, pull.duration_ms, pull.exit_code);

    if !pull.success() {
        let message = if pull.stderr.is_empty() {
            "Failed to pull screenshot".to_string()
        } else {
            pull.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    // Best-effort cleanup of the device-side file
    let args = ["shell", "rm", DEVICE_PATH];
    let rm = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, rm.duration_ms, rm.exit_code);

    let byte_size = std::fs::metadata(&input.output)
        .map(|m| m.len())
        .unwrap_or(0);

    Outcome::ok(ScreenshotOutput {
        path: input.output.clone(),
        byte_size,
    })
    .with_message(format!("Screenshot saved to {}", input.output))
    .with_trace(trace.finish())
}
