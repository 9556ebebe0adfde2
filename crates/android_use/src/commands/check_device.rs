//! check-device command - list/verify connected devices

use super::CommandContext;
use crate::device::{find_device, parse_device_list, Device, DeviceState};
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct CheckDeviceInput {
    /// Serial to verify; None just lists what is attached
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckDeviceOutput {
    pub devices: Vec<Device>,
    pub count: usize,
}

pub async fn check_device(ctx: &CommandContext, input: &CheckDeviceInput) -> Outcome {
    let mut trace = TraceBuilder::new("check-device");

    let options = ctx.options(None);
    let result = ctx.adb.exec(&["devices", "-l"], &options).await;
    trace.record_call(&["devices", "-l"], result.duration_ms, result.exit_code);

    if !result.success() {
        let message = if result.stderr.is_empty() {
            "Failed to list devices".to_string()
        } else {
            result.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    let devices = parse_device_list(&result.stdout);

    if let Some(serial) = input.serial.as_deref() {
        let Some(device) = find_device(&devices, Some(serial)) else {
            return Outcome::err("DEVICE_NOT_FOUND", format!("Device not found: {serial}"))
                .with_trace(trace.finish());
        };

        match device.state {
            DeviceState::Offline => {
                return Outcome::err("DEVICE_OFFLINE", format!("Device is offline: {serial}"))
                    .with_trace(trace.finish());
            }
            DeviceState::Unauthorized => {
                return Outcome::err(
                    "DEVICE_UNAUTHORIZED",
                    format!(
                        "Device unauthorized: {serial}. Please accept the USB debugging prompt on the device."
                    ),
                )
                .with_trace(trace.finish());
            }
            _ => {}
        }
    }

    let message = if devices.is_empty() {
        "No devices connected".to_string()
    } else {
        format!("Found {} device(s)", devices.len())
    };

    let count = devices.len();
    Outcome::ok(CheckDeviceOutput { devices, count })
        .with_message(message)
        .with_trace(trace.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adb::{MockAdb, MockResponse, MOCK_DEVICES_RESPONSE, MOCK_NO_DEVICES_RESPONSE};
    use crate::config::Config;
    use std::sync::Arc;

    fn ctx(mock: MockAdb) -> CommandContext {
        CommandContext::new(Arc::new(mock), Config::default())
    }

    #[tokio::test]
    async fn test_lists_devices() {
        let mock = MockAdb::new().respond("devices -l", MockResponse::ok(MOCK_DEVICES_RESPONSE));
        let outcome = check_device(&ctx(mock), &CheckDeviceInput::default()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Found 2 device(s)"));
        let data = outcome.data.unwrap();
        assert_eq!(data["count"], 2);
        assert_eq!(data["devices"][0]["serial"], "emulator-5554");
        assert_eq!(data["devices"][1]["transport"], "wifi");
    }

    #[tokio::test]
    async fn test_empty_list_is_success() {
        let mock =
            MockAdb::new().respond("devices -l", MockResponse::ok(MOCK_NO_DEVICES_RESPONSE));
        let outcome = check_device(&ctx(mock), &CheckDeviceInput::default()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("No devices connected"));
    }

    #[tokio::test]
    async fn test_requested_serial_missing() {
        let mock = MockAdb::new().respond("devices -l", MockResponse::ok(MOCK_DEVICES_RESPONSE));
        let input = CheckDeviceInput {
            serial: Some("NOPE".to_string()),
        };
        let outcome = check_device(&ctx(mock), &input).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.unwrap().code, "DEVICE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unauthorized_device_reported() {
        let listing = "List of devices attached\nABC123\tunauthorized\n";
        let mock = MockAdb::new().respond("devices -l", MockResponse::ok(listing));
        let input = CheckDeviceInput {
            serial: Some("ABC123".to_string()),
        };
        let outcome = check_device(&ctx(mock), &input).await;
        assert_eq!(outcome.error.unwrap().code, "DEVICE_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_adb_failure() {
        let mock = MockAdb::new().respond("devices -l", MockResponse::fail(1, "adb server down"));
        let outcome = check_device(&ctx(mock), &CheckDeviceInput::default()).await;
        let error = outcome.error.unwrap();
        assert_eq!(error.code, "ADB_FAILED");
        assert_eq!(error.message, "adb server down");
    }
}
