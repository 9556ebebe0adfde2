//! Command handlers
//!
//! Each command is an async function over a [`CommandContext`] and a typed
//! input struct, returning a structured [`Outcome`](crate::outcome::Outcome).
//! Handlers record every adb call they make into an execution trace.

mod check_device;
mod get_screen;
mod install_apk;
mod key;
mod launch_app;
mod screenshot;
mod swipe;
mod tap;
mod type_text;
mod wake;

pub use check_device::{check_device, CheckDeviceInput, CheckDeviceOutput};
pub use get_screen::{get_screen, GetScreenInput, GetScreenOutput};
pub use install_apk::{install_apk, InstallApkInput, InstallApkOutput};
pub use key::{key, KeyInput, KeyOutput};
pub use launch_app::{launch_app, LaunchAppInput, LaunchAppOutput};
pub use screenshot::{screenshot, ScreenshotInput, ScreenshotOutput};
pub use swipe::{swipe, SwipeInput, SwipeOutput};
pub use tap::{tap, TapInput, TapOutput};
pub use type_text::{type_text, TypeTextInput, TypeTextOutput};
pub use wake::{wake, WakeInput, WakeOutput};

use crate::adb::{AdbProvider, ExecOptions};
use crate::config::Config;
use std::sync::Arc;

/// Shared state handed to every command.
pub struct CommandContext {
    pub adb: Arc<dyn AdbProvider>,
    pub config: Config,
}

impl CommandContext {
    pub fn new(adb: Arc<dyn AdbProvider>, config: Config) -> Self {
        Self { adb, config }
    }

    /// Build exec options for a command, preferring its explicit serial
    /// over the configured default.
    pub(crate) fn options(&self, serial: Option<&str>) -> ExecOptions {
        ExecOptions {
            timeout_ms: self.config.timeout_ms,
            serial: serial
                .map(str::to_string)
                .or_else(|| self.config.default_serial.clone()),
        }
    }
}
