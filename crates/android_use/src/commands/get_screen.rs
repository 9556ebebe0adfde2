//! get-screen command - dump the UI hierarchy as raw XML

use super::CommandContext;
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

const DUMP_PATH: &str = "/sdcard/window_dump.xml";

#[derive(Debug, Clone, Default)]
pub struct GetScreenInput {
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetScreenOutput {
    pub xml: String,
    pub byte_size: usize,
}

pub async fn get_screen(ctx: &CommandContext, input: &GetScreenInput) -> Outcome {
    let mut trace = TraceBuilder::new("get-screen");
    let options = ctx.options(input.serial.as_deref());

    let args = ["shell", "uiautomator", "dump", DUMP_PATH];
    let dump = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, dump.duration_ms, dump.exit_code);

    if !dump.success() {
        let message = if dump.stderr.is_empty() {
            "UI dump failed".to_string()
        } else {
            dump.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    let args = ["shell", "cat", DUMP_PATH];
    let cat = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, cat.duration_ms, cat.exit_code);

    if !cat.success() {
        let message = if cat.stderr.is_empty() {
            "Failed to read UI dump".to_string()
        } else {
            cat.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    let xml = cat.stdout;

    let args = ["shell", "rm", DUMP_PATH];
    let rm = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, rm.duration_ms, rm.exit_code);

    let message = format!("UI hierarchy dumped ({} chars)", xml.chars().count());
    let byte_size = xml.len();

    Outcome::ok(GetScreenOutput { xml, byte_size })
        .with_message(message)
        .with_trace(trace.finish())
}
