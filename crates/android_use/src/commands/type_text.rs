//! type-text command - type text with proper escaping

use super::CommandContext;
use crate::escape::{split_text_for_input, DEFAULT_CHUNK_LENGTH};
use crate::outcome::Outcome;
use crate::trace::TraceBuilder;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TypeTextInput {
    pub text: String,
    pub serial: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TypeTextOutput {
    pub text: String,
    pub length: usize,
}

pub async fn type_text(ctx: &CommandContext, input: &TypeTextInput) -> Outcome {
    let mut trace = TraceBuilder::new("type-text");

    if input.text.is_empty() {
        return Outcome::err("INVALID_INPUT", "text must not be empty")
            .with_trace(trace.finish());
    }

    // Chunking keeps each shell invocation under adb's command length
    // ceiling; chunks concatenate on-device so order matters.
    let chunks = match split_text_for_input(&input.text, DEFAULT_CHUNK_LENGTH) {
        Ok(chunks) => chunks,
        Err(e) => return Outcome::from_error(&e).with_trace(trace.finish()),
    };

    let options = ctx.options(input.serial.as_deref());
    for chunk in &chunks {
        let args = ["shell", "input", "text", chunk.as_str()];
        let result = ctx.adb.exec(&args, &options).await;
        trace.record_call(&args, result.duration_ms, result.exit_code);

        if !result.success() {
            let message = if result.stderr.is_empty() {
                "Type text failed".to_string()
            } else {
                result.stderr.clone()
            };
            return Outcome::err("ADB_FAILED", message).with_trace(trace.finish());
        }
    }

    // Escaping silently drops characters above printable ASCII; surface
    // that to the user instead of failing, since partial typing is still
    // useful.
    let non_ascii = input.text.chars().filter(|&c| c as u32 > 126).count();

    let mut outcome = Outcome::ok(TypeTextOutput {
        text: input.text.clone(),
        length: input.text.chars().count(),
    })
    .with_message(format!("Typed {} character(s)", input.text.chars().count()));

    if non_ascii > 0 {
        outcome = outcome.with_warning(format!(
            "{non_ascii} non-ASCII character(s) may not have been typed correctly"
        ));
    }

    outcome.with_trace(trace.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adb::{MockAdb, MockResponse};
    use crate::config::Config;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_types_escaped_text() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let input = TypeTextInput {
            text: "hello world".to_string(),
            serial: None,
        };
        let outcome = type_text(&ctx, &input).await;
        assert!(outcome.success);
        assert!(mock.was_called("shell input text hello%sworld"));
        assert!(outcome.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_long_text_sends_chunks_in_order() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let input = TypeTextInput {
            text: "a".repeat(250),
            serial: None,
        };
        let outcome = type_text(&ctx, &input).await;
        assert!(outcome.success);

        let calls = mock.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0][3], "a".repeat(100));
        assert_eq!(calls[1][3], "a".repeat(100));
        assert_eq!(calls[2][3], "a".repeat(50));
    }

    #[tokio::test]
    async fn test_non_ascii_warns() {
        let mock = Arc::new(MockAdb::new());
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let input = TypeTextInput {
            text: "café".to_string(),
            serial: None,
        };
        let outcome = type_text(&ctx, &input).await;
        assert!(outcome.success);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("1 non-ASCII"));
        assert!(mock.was_called("shell input text caf"));
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let ctx = CommandContext::new(Arc::new(MockAdb::new()), Config::default());
        let input = TypeTextInput {
            text: String::new(),
            serial: None,
        };
        let outcome = type_text(&ctx, &input).await;
        assert_eq!(outcome.error.unwrap().code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_chunk_failure_aborts() {
        let mock = MockAdb::new().respond("input text", MockResponse::fail(1, "device gone"));
        let mock = Arc::new(mock);
        let ctx = CommandContext::new(mock.clone(), Config::default());
        let input = TypeTextInput {
            text: "a".repeat(250),
            serial: None,
        };
        let outcome = type_text(&ctx, &input).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.unwrap().code, "ADB_FAILED");
        // First chunk failed, no further chunks were attempted
        assert_eq!(mock.calls().len(), 1);
    }
}
