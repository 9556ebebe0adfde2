//! Rendering of command outcomes as text or JSON

use crate::config::OutputFormat;
use crate::outcome::Outcome;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

fn use_colors() -> bool {
    // Respect the NO_COLOR convention
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn color(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Render an outcome per the requested format.
pub fn format_outcome(outcome: &Outcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(outcome),
        OutputFormat::Text => format_text(outcome, use_colors()),
    }
}

/// Machine-readable rendering of the whole outcome.
pub fn format_json(outcome: &Outcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
}

fn format_text(outcome: &Outcome, colors: bool) -> String {
    let mut lines = Vec::new();

    if outcome.success {
        let message = outcome.message.as_deref().unwrap_or("Success");
        lines.push(color(&format!("\u{2713} {message}"), GREEN, colors));

        if let Some(data) = &outcome.data {
            match data {
                serde_json::Value::Object(map) => {
                    for (key, value) in map {
                        let key_str = color(&format!("{key}:"), DIM, colors);
                        lines.push(format!("  {key_str} {}", render_value(value)));
                    }
                }
                serde_json::Value::Null => {}
                other => lines.push(format!("  {}", render_value(other))),
            }
        }
    } else {
        let (code, message) = outcome
            .error
            .as_ref()
            .map(|e| (e.code.as_str(), e.message.as_str()))
            .unwrap_or(("UNKNOWN", "Unknown error"));
        lines.push(color(&format!("\u{2717} [{code}] {message}"), RED, colors));
    }

    for warning in &outcome.warnings {
        lines.push(color(&format!("\u{26A0} {warning}"), YELLOW, colors));
    }

    lines.join("\n")
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
