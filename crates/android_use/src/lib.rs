//! android_use: Android device control through the adb tool
//!
//! This library provides:
//! - Parsing of `adb devices -l` output into structured device records
//! - Text escaping and chunking for `adb shell input text`
//! - Command handlers (tap, swipe, type-text, key, wake, screenshot,
//!   launch-app, install-apk, get-screen, check-device)
//! - A provider seam so commands can run against the real adb binary or
//!   a scripted mock
//!
//! # Example
//!
//! ```no_run
//! use android_use::{commands, CommandContext, Config, LocalAdb};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let adb = Arc::new(LocalAdb::new(config.adb_path.as_str()));
//!     let ctx = CommandContext::new(adb, config);
//!
//!     let input = commands::TapInput { x: 500, y: 800, serial: None };
//!     let outcome = commands::tap(&ctx, &input).await;
//!     println!("{}", outcome.success);
//! }
//! ```

// Core modules
pub mod error;

// Configuration
pub mod config;

// Domain logic
pub mod device;
pub mod escape;
pub mod keys;

// Execution
pub mod adb;
pub mod commands;
pub mod format;
pub mod outcome;
pub mod trace;

// Re-export commonly used types and functions
pub use error::{AdbError, Result};

// Config re-exports
pub use config::{Config, OutputFormat};

// Device parser re-exports
pub use device::{
    find_device, infer_transport, parse_device_line, parse_device_list, parse_device_state,
    Device, DeviceState, DeviceTransport,
};

// Escaper re-exports
pub use escape::{
    escape_for_input, escape_shell_arg, is_ascii_printable, split_text_for_input,
    DEFAULT_CHUNK_LENGTH,
};

// Keycode re-exports
pub use keys::{key_names, keycode_name, resolve_keycode, KEYCODES};

// Execution re-exports
pub use adb::{AdbProvider, ExecOptions, ExecResult, LocalAdb, MockAdb};
pub use commands::CommandContext;
pub use format::format_outcome;
pub use outcome::Outcome;
pub use trace::{ExecutionTrace, TraceBuilder};
