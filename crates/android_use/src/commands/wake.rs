//! wake command - wake the device and dismiss the lock screen

use super::CommandContext;
use crate::keys::{KEYCODE_MENU, KEYCODE_WAKEUP};
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct WakeInput {
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WakeOutput {
    pub was_asleep: bool,
    pub is_awake: bool,
}

pub async fn wake(ctx: &CommandContext, input: &WakeInput) -> Outcome {
    let mut trace = TraceBuilder::new("wake");
    let options = ctx.options(input.serial.as_deref());

    // Probe current display power state; failure here is non-fatal
    let power = ctx.adb.exec(&["shell", "dumpsys", "power"], &options).await;
    trace.record_call(
        &["shell", "dumpsys", "power"],
        power.duration_ms,
        power.exit_code,
    );
    let was_asleep = !power.stdout.contains("state=ON");

    let wakeup = KEYCODE_WAKEUP.to_string();
    let args = ["shell", "input", "keyevent", wakeup.as_str()];
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    if !result.success() {
        let message = if result.stderr.is_empty() {
            "Failed to wake device".to_string()
        } else {
            result.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    // MENU dismisses the slide-to-unlock variant of the lock screen
    let menu = KEYCODE_MENU.to_string();
    let args = ["shell", "input", "keyevent", menu.as_str()];
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    tokio::time::sleep(Duration::from_millis(300)).await;

    // Swipe up to clear any remaining lock overlay
    let args = ["shell", "input", "swipe", "540", "1800", "540", "800", "300"];
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    let message = if was_asleep {
        "Device woken up"
    } else {
        "Device was already awake"
    };

    Outcome::ok(WakeOutput {
        was_asleep,
        is_awake: true,
    })
    .with_message(message)
    .with_trace(trace.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adb::{MockAdb, MockResponse};
    use crate::config::Config;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_wake_sleeping_device() {
        let mock = Arc::new(
            MockAdb::new().respond("dumpsys power", MockResponse::ok("Display Power: state=OFF")),
        );
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let outcome = wake(&ctx, &WakeInput::default()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Device woken up"));
        assert!(mock.was_called("keyevent 224"));
        assert!(mock.was_called("keyevent 82"));
        assert!(mock.was_called("input swipe 540 1800 540 800"));
        let data = outcome.data.unwrap();
        assert_eq!(data["was_asleep"], true);
    }

    #[tokio::test]
    async fn test_wake_already_awake() {
        let mock = Arc::new(
            MockAdb::new().respond("dumpsys power", MockResponse::ok("Display Power: state=ON")),
        );
        let ctx = CommandContext::new(mock, Config::default());
        let outcome = wake(&ctx, &WakeInput::default()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Device was already awake"));
    }
}
