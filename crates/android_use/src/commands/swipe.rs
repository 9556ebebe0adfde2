//! swipe command - perform a swipe gesture

use super::CommandContext;
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

/// Default swipe duration when none is given.
pub const DEFAULT_SWIPE_DURATION_MS: u32 = 300;

#[derive(Debug, Clone)]
pub struct SwipeInput {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
    pub duration_ms: u32,
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SwipeOutput {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
    pub duration_ms: u32,
}

pub async fn swipe(ctx: &CommandContext, input: &SwipeInput) -> Outcome {
    let mut trace = TraceBuilder::new("swipe");

    let coords = [
        input.start_x.to_string(),
        input.start_y.to_string(),
        input.end_x.to_string(),
        input.end_y.to_string(),
        input.duration_ms.to_string(),
    ];
    let args = [
        "shell",
        "input",
        "swipe",
        coords[0].as_str(),
        coords[1].as_str(),
        coords[2].as_str(),
        coords[3].as_str(),
        coords[4].as_str(),
    ];

    let options = ctx.options(input.serial.as_deref());
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    if !result.success() {
        let message = if result.stderr.is_empty() {
            "Swipe failed".to_string()
        } else {
            result.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    Outcome::ok(SwipeOutput {
        start_x: input.start_x,
        start_y: input.start_y,
        end_x: input.end_x,
        end_y: input.end_y,
        duration_ms: input.duration_ms,
    })
    .with_message(format!(
        "Swiped from ({},{}) to ({},{})",
        input.start_x, input.start_y, input.end_x, input.end_y
    ))
    .with_trace(trace.finish())
}
