//! launch-app command - launch an app by package name

use super::CommandContext;
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref TOTAL_TIME_RE: Regex = Regex::new(r"TotalTime:\s*(\d+)").unwrap();
}

#[derive(Debug, Clone)]
pub struct LaunchAppInput {
    /// Package name (e.g. com.example.app)
    pub app: String,
    /// Specific activity to start; without one the launcher intent is
    /// fired through monkey, which is the most reliable package-only launch
    pub activity: Option<String>,
    /// Wait for the launch to complete (am start -W)
    pub wait: bool,
    /// Clear app data before launching
    pub clear_data: bool,
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LaunchAppOutput {
    pub package_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_time_ms: Option<u64>,
}

pub async fn launch_app(ctx: &CommandContext, input: &LaunchAppInput) -> Outcome {
    let mut trace = TraceBuilder::new("launch-app");
    let options = ctx.options(input.serial.as_deref());

    if input.clear_data {
        // App may not exist yet, so a clear failure is not fatal
        let args = ["shell", "pm", "clear", input.app.as_str()];
        let clear = ctx.adb.exec(&args, &options).await;
        trace.record_call(&args, clear.duration_ms, clear.exit_code);
    }

    let Some(activity) = input.activity.as_deref() else {
        let args = [
            "shell",
            "monkey",
            "-p",
            input.app.as_str(),
            "-c",
            "android.intent.category.LAUNCHER",
            "1",
        ];
        let monkey = ctx.adb.exec(&args, &options).await;
        trace.record_call(&args, monkey.duration_ms, monkey.exit_code);

        if !monkey.success() || monkey.stdout.contains("No activities found") {
            return Outcome::err(
                "ADB_FAILED",
                format!(
                    "Failed to launch {}: app not found or no launcher activity",
                    input.app
                ),
            )
            .with_trace(trace.finish());
        }

        return Outcome::ok(LaunchAppOutput {
            package_name: input.app.clone(),
            activity: None,
            launch_time_ms: None,
        })
        .with_message(format!("Launched {}", input.app))
        .with_trace(trace.finish());
    };

    let component = format!("{}/{}", input.app, activity);
    let mut args = vec!["shell", "am", "start"];
    if input.wait {
        args.push("-W");
    }
    args.push("-n");
    args.push(&component);

    let launch = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, launch.duration_ms, launch.exit_code);

    if !launch.success() {
        let message = if launch.stderr.is_empty() {
            format!("Failed to launch {}", input.app)
        } else {
            launch.stderr.clone()
        };
        return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
    }

    let launch_time_ms = TOTAL_TIME_RE
        .captures(&launch.stdout)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok());

    let message = match launch_time_ms {
        Some(t) => format!("Launched {} in {t}ms", input.app),
        None => format!("Launched {}", input.app),
    };

    Outcome::ok(LaunchAppOutput {
        package_name: input.app.clone(),
        activity: Some(activity.to_string()),
        launch_time_ms,
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

    fn input(app: &str) -> LaunchAppInput {
        LaunchAppInput {
            app: app.to_string(),
            activity: None,
            wait: true,
            clear_data: false,
            serial: None,
        }
    }

    #[tokio::test]
    async fn test_launch_via_monkey() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let outcome = launch_app(&ctx, &input("com.example.app")).await;
        assert!(outcome.success);
        assert!(mock.was_called("monkey -p com.example.app -c android.intent.category.LAUNCHER 1"));
    }

    #[tokio::test]
    async fn test_monkey_no_activities() {
        let mock = MockAdb::new().respond(
            "monkey",
            MockResponse::ok("** No activities found to run, monkey aborted."),
        );
        let ctx = CommandContext::new(Arc::new(mock), Config::default());
        let outcome = launch_app(&ctx, &input("com.missing.app")).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.unwrap().code, "ADB_FAILED");
    }

    #[tokio::test]
    async fn test_launch_activity_with_total_time() {
        let mock = Arc::new(
            MockAdb::new().respond("am start", MockResponse::ok("Status: ok\nTotalTime: 423\n")),
        );
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let mut inp = input("com.example.app");
        inp.activity = Some(".MainActivity".to_string());
        let outcome = launch_app(&ctx, &inp).await;
        assert!(outcome.success);
        assert!(mock.was_called("am start -W -n com.example.app/.MainActivity"));
        assert_eq!(outcome.data.unwrap()["launch_time_ms"], 423);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Launched com.example.app in 423ms")
        );
    }

    #[tokio::test]
    async fn test_clear_data_runs_pm_clear() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let mut inp = input("com.example.app");
        inp.clear_data = true;
        launch_app(&ctx, &inp).await;
        assert!(mock.was_called("shell pm clear com.example.app"));
    }
}
