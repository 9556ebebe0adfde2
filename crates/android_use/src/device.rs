//! Parsing of `adb devices -l` output into structured device records
//!
//! Example output:
//! ```text
//! List of devices attached
//! emulator-5554          device product:sdk_gphone64_arm64 model:sdk_gphone64_arm64 device:emu64a transport_id:1
//! 192.168.1.100:5555     device product:flame model:Pixel_4 device:flame transport_id:2
//! XXXXXX                 unauthorized
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device state as reported by adb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    #[serde(rename = "device")]
    Device,
    #[serde(rename = "offline")]
    Offline,
    #[serde(rename = "unauthorized")]
    Unauthorized,
    #[serde(rename = "no permissions")]
    NoPermissions,
    #[serde(rename = "bootloader")]
    Bootloader,
    #[serde(rename = "recovery")]
    Recovery,
    #[serde(rename = "sideload")]
    Sideload,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceState::Device => "device",
            DeviceState::Offline => "offline",
            DeviceState::Unauthorized => "unauthorized",
            DeviceState::NoPermissions => "no permissions",
            DeviceState::Bootloader => "bootloader",
            DeviceState::Recovery => "recovery",
            DeviceState::Sideload => "sideload",
            DeviceState::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Connection medium inferred from the shape of the serial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTransport {
    Usb,
    Wifi,
    Unknown,
}

impl fmt::Display for DeviceTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceTransport::Usb => "usb",
            DeviceTransport::Wifi => "wifi",
            DeviceTransport::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One entry from `adb devices -l`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub serial: String,
    pub state: DeviceState,
    pub transport: DeviceTransport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(rename = "transportId", skip_serializing_if = "Option::is_none")]
    pub transport_id: Option<String>,
}

impl Device {
    /// True iff the device will accept commands.
    pub fn is_ready(&self) -> bool {
        self.state == DeviceState::Device
    }
}

/// Parse full `adb devices -l` output into a device list.
///
/// Header and blank lines are skipped; lines that fail to parse are
/// dropped rather than reported. Output order matches input order and
/// duplicate serials are preserved.
pub fn parse_device_list(output: &str) -> Vec<Device> {
    output
        .trim()
        .lines()
        .filter(|line| !line.starts_with("List of devices") && !line.trim().is_empty())
        .filter_map(parse_device_line)
        .collect()
}

/// Parse a single device line, `None` if it carries no serial+state pair.
pub fn parse_device_line(line: &str) -> Option<Device> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let serial = parts[0].to_string();
    let mut device = Device {
        transport: infer_transport(&serial),
        serial,
        state: parse_device_state(parts[1]),
        product: None,
        model: None,
        device: None,
        transport_id: None,
    };

    // Remaining tokens are key:value pairs (product:x model:x device:x transport_id:x)
    for part in &parts[2..] {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        match key {
            "product" => device.product = Some(value.to_string()),
            "model" => device.model = Some(value.to_string()),
            "device" => device.device = Some(value.to_string()),
            "transport_id" => device.transport_id = Some(value.to_string()),
            _ => {}
        }
    }

    Some(device)
}

/// Parse a device state token, case-insensitively.
///
/// "no permissions" is two words and shows up as just "no" once the line
/// has been split on whitespace, so both spellings map to `NoPermissions`.
/// Anything unrecognized is `Unknown`, never an error.
pub fn parse_device_state(state: &str) -> DeviceState {
    let normalized = state.to_lowercase();

    if normalized == "no" || normalized.starts_with("no permissions") {
        return DeviceState::NoPermissions;
    }

    match normalized.as_str() {
        "device" => DeviceState::Device,
        "offline" => DeviceState::Offline,
        "unauthorized" => DeviceState::Unauthorized,
        "bootloader" => DeviceState::Bootloader,
        "recovery" => DeviceState::Recovery,
        "sideload" => DeviceState::Sideload,
        _ => DeviceState::Unknown,
    }
}

/// Infer the transport from the serial's shape.
///
/// Heuristic, not authoritative: adb does not report this directly.
/// Ambiguous serials (hyphens without the emulator prefix, etc.) resolve
/// to `Unknown`.
pub fn infer_transport(serial: &str) -> DeviceTransport {
    // WiFi: host:port shape (e.g. 192.168.1.100:5555)
    if serial.contains(':') && ends_with_port(serial) {
        return DeviceTransport::Wifi;
    }
    // USB: emulator-NNNN or a plain alphanumeric serial
    if serial.starts_with("emulator-")
        || (!serial.is_empty() && serial.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return DeviceTransport::Usb;
    }
    DeviceTransport::Unknown
}

fn ends_with_port(serial: &str) -> bool {
    match serial.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Find a device by serial, or auto-select when no serial is given.
///
/// Auto-selection prefers the first ready device but falls back to the
/// first device in any state, so a downstream readiness check can produce
/// a more specific error than "no device".
pub fn find_device<'a>(devices: &'a [Device], serial: Option<&str>) -> Option<&'a Device> {
    if devices.is_empty() {
        return None;
    }

    match serial {
        None => devices
            .iter()
            .find(|d| d.state == DeviceState::Device)
            .or_else(|| devices.first()),
        Some(s) => devices.iter().find(|d| d.serial == s),
    }
}
