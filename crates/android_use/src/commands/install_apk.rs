//! install-apk command - install an APK file

use super::CommandContext;
use crate::adb::ExecOptions;
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

lazy_static! {
    static ref FAILURE_RE: Regex = Regex::new(r"Failure \[([^\]]+)\]").unwrap();
    static ref PKG_RE: Regex = Regex::new(r"pkg:\s*name='([^']+)'").unwrap();
}

#[derive(Debug, Clone)]
pub struct InstallApkInput {
    pub apk_path: String,
    /// Replace an existing install (-r)
    pub replace: bool,
    /// Allow version downgrade (-d)
    pub downgrade: bool,
    /// Grant all runtime permissions (-g)
    pub grant_permissions: bool,
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InstallApkOutput {
    pub package_name: String,
    pub was_replaced: bool,
}

pub async fn install_apk(ctx: &CommandContext, input: &InstallApkInput) -> Outcome {
    let mut trace = TraceBuilder::new("install-apk");

    if !Path::new(&input.apk_path).exists() {
        return Outcome::err(
            "FILE_NOT_FOUND",
            format!("APK file not found: {}", input.apk_path),
        )
        .with_trace(trace.finish());
    }

    let mut args = vec!["install"];
    if input.replace {
        args.push("-r");
    }
    if input.downgrade {
        args.push("-d");
    }
    if input.grant_permissions {
        args.push("-g");
    }
    args.push(&input.apk_path);

    // APK installs can be slow; give them extra headroom
    let options = ExecOptions {
        timeout_ms: ctx.config.timeout_ms * 4,
        ..ctx.options(input.serial.as_deref())
    };
    let result = ctx.adb.exec(&args, &options).await;
    trace.record_call(&args, result.duration_ms, result.exit_code);

    if !result.success() || result.stdout.contains("Failure") {
        let reason = FAILURE_RE
            .captures(&result.stdout)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| {
                if result.stderr.is_empty() {
                    "Unknown error".to_string()
                } else {
                    result.stderr.clone()
                }
            });
        return Outcome::err("ADB_FAILED", format!("Install failed: {reason}"))
            .with_trace(trace.finish());
    }

    // adb rarely reports the package name; fall back to the file stem
    let package_name = PKG_RE
        .captures(&result.stdout)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| {
            Path::new(&input.apk_path)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".to_string())
        });

    Outcome::ok(InstallApkOutput {
        package_name,
        was_replaced: input.replace,
    })
    .with_message(format!("Installed {}", input.apk_path))
    .with_trace(trace.finish())
}
