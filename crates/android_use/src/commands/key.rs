//! key command - press a keycode by name or number

use super::CommandContext;
use crate::keys::{key_names, keycode_name, resolve_keycode};
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct KeyInput {
    /// Key name ("HOME", "back") or numeric keycode ("3")
    pub key: String,
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeyOutput {
    pub keycode: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<&'static str>,
}

pub async fn key(ctx: &CommandContext, input: &KeyInput) -> Outcome {
    let mut trace = TraceBuilder::new("key");

    let (keycode, key_name) = if input.key.chars().all(|c| c.is_ascii_digit())
        && !input.key.is_empty()
    {
        match input.key.parse::<u16>() {
            Ok(code) => (code, keycode_name(code)),
            Err(_) => {
                return Outcome::err(
                    "INVALID_INPUT",
                    format!("Keycode out of range: {}", input.key),
                )
                .with_trace(trace.finish());
            }
        }
    } else {
        match resolve_keycode(&input.key) {
            Some(code) => (code, keycode_name(code)),
            None => {
                return Outcome::err(
                    "INVALID_INPUT",
                    format!(
                        "Unknown key name: {}. Valid names: {}",
                        input.key,
                        key_names().join(", ")
                    ),
                )
                .with_trace(trace.finish());
            }
        }
    };

    let code_str = keycode.to_string();
    let args = ["shell", "input", "keyevent", code_str.as_str()];

    let options = ctx.options(input.serial.as_deref());
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    if !result.success() {
        let message = if result.stderr.is_empty() {
            "Key press failed".to_string()
        } else {
            result.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    let message = match key_name {
        Some(name) => format!("Pressed {name} ({keycode})"),
        None => format!("Pressed keycode {keycode}"),
    };

    Outcome::ok(KeyOutput { keycode, key_name })
        .with_message(message)
        .with_trace(trace.finish())
}
