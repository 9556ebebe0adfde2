//! android-use - Android device control via ADB
//!
//! Usage:
//!     android-use [OPTIONS] <COMMAND> [ARGS]
//!
//! Environment Variables:
//!     ANDROID_USE_ADB_PATH: Path to the adb binary (default: adb)
//!     ANDROID_USE_SERIAL: Default device serial for multi-device setups

use android_use::{commands, CommandContext, Config, LocalAdb, OutputFormat};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;

/// Android device control via ADB
#[derive(Parser, Debug)]
#[command(name = "android-use")]
#[command(about = "Android device control via ADB", version)]
#[command(after_help = r#"Examples:
    # List connected devices
    android-use check-device

    # Tap at coordinates
    android-use tap 500 800

    # Type text on the focused input field
    android-use type-text "Hello World"

    # Press a named key
    android-use key HOME

    # Capture a screenshot
    android-use screenshot ./screen.png

    # Launch an app by package name
    android-use launch-app com.example.app

    # Machine-readable output
    android-use --json tap 100 200
"#)]
struct Cli {
    /// Target device serial
    #[arg(short = 's', long, env = "ANDROID_USE_SERIAL", global = true)]
    serial: Option<String>,

    /// Path to the adb binary
    #[arg(long, env = "ANDROID_USE_ADB_PATH", default_value = "adb", global = true)]
    adb_path: String,

    /// Timeout for adb operations in milliseconds
    #[arg(long, default_value = "15000", global = true)]
    timeout: u64,

    /// Max retries for transient failures
    #[arg(long, default_value = "1", global = true)]
    retries: u32,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List connected devices, optionally verifying one serial
    CheckDevice {
        /// Serial to verify
        #[arg(value_name = "SERIAL")]
        requested: Option<String>,
    },
    /// Wake the device and dismiss the lock screen
    Wake,
    /// Dump the UI hierarchy as XML
    GetScreen,
    /// Tap at coordinates
    Tap { x: u32, y: u32 },
    /// Type text into the focused input field
    TypeText { text: String },
    /// Perform a swipe gesture
    Swipe {
        start_x: u32,
        start_y: u32,
        end_x: u32,
        end_y: u32,
        /// Gesture duration in milliseconds
        #[arg(default_value = "300")]
        duration_ms: u32,
    },
    /// Press a keycode by name (HOME, BACK, ...) or number
    Key { key: String },
    /// Capture the device screen to a local PNG
    Screenshot {
        /// Local output path
        #[arg(default_value = "./screenshot.png")]
        output: String,
    },
    /// Launch an app by package name
    LaunchApp {
        /// Package name (e.g. com.example.app)
        package: String,
        /// Specific activity to start
        #[arg(long)]
        activity: Option<String>,
        /// Do not wait for the launch to complete
        #[arg(long)]
        no_wait: bool,
        /// Clear app data before launching
        #[arg(long)]
        clear: bool,
    },
    /// Install an APK file
    InstallApk {
        /// Path to the APK
        path: String,
        /// Do not replace an existing install
        #[arg(long)]
        no_replace: bool,
        /// Allow version downgrade
        #[arg(long)]
        downgrade: bool,
        /// Grant all runtime permissions
        #[arg(long)]
        grant: bool,
    },
}

async fn run_command(ctx: &CommandContext, command: Command, serial: Option<String>) -> android_use::Outcome {
    match command {
        Command::CheckDevice { requested } => {
            let input = commands::CheckDeviceInput {
                serial: requested.or(serial),
            };
            commands::check_device(ctx, &input).await
        }
        Command::Wake => {
            let input = commands::WakeInput { serial };
            commands::wake(ctx, &input).await
        }
        Command::GetScreen => {
            let input = commands::GetScreenInput { serial };
            commands::get_screen(ctx, &input).await
        }
        Command::Tap { x, y } => {
            let input = commands::TapInput { x, y, serial };
            commands::tap(ctx, &input).await
        }
        Command::TypeText { text } => {
            let input = commands::TypeTextInput { text, serial };
            commands::type_text(ctx, &input).await
        }
        Command::Swipe {
            start_x,
            start_y,
            end_x,
            end_y,
            duration_ms,
        } => {
            let input = commands::SwipeInput {
                start_x,
                start_y,
                end_x,
                end_y,
                duration_ms,
                serial,
            };
            commands::swipe(ctx, &input).await
        }
        Command::Key { key } => {
            let input = commands::KeyInput { key, serial };
            commands::key(ctx, &input).await
        }
        Command::Screenshot { output } => {
            let input = commands::ScreenshotInput { output, serial };
            commands::screenshot(ctx, &input).await
        }
        Command::LaunchApp {
            package,
            activity,
            no_wait,
            clear,
        } => {
            let input = commands::LaunchAppInput {
                app: package,
                activity,
                wait: !no_wait,
                clear_data: clear,
                serial,
            };
            commands::launch_app(ctx, &input).await
        }
        Command::InstallApk {
            path,
            no_replace,
            downgrade,
            grant,
        } => {
            let input = commands::InstallApkInput {
                apk_path: path,
                replace: !no_replace,
                downgrade,
                grant_permissions: grant,
                serial,
            };
            commands::install_apk(ctx, &input).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "android_use=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    // Fail fast if the adb binary is not reachable at all
    which::which(&args.adb_path).map_err(|_| {
        anyhow!(
            "{} is not installed or not in PATH. Install android platform-tools.",
            args.adb_path
        )
    })?;

    let config = Config::new()
        .with_adb_path(args.adb_path.clone())
        .with_timeout_ms(args.timeout)
        .with_max_retries(args.retries)
        .with_output_format(if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        })
        .with_verbose(args.verbose);

    let adb = Arc::new(LocalAdb::new(config.adb_path.as_str()));
    let ctx = CommandContext::new(adb, config.clone());

    let outcome = run_command(&ctx, args.command, args.serial).await;

    println!("{}", android_use::format_outcome(&outcome, config.output_format));

    if !outcome.success {
        std::process::exit(outcome.exit_code);
    }
    Ok(())
}
