//! Escaping of arbitrary text for `adb shell input text`
//!
//! The `input text` primitive treats literal spaces as argument
//! separators, gives most ASCII punctuation shell meaning, and only
//! reliably accepts printable ASCII. Text is escaped character by
//! character and split into length-bounded chunks so each chunk fits
//! inside adb's practical command-length ceiling.

use crate::error::{AdbError, Result};

/// Default maximum escaped length of a single `input text` chunk.
pub const DEFAULT_CHUNK_LENGTH: usize = 100;

/// Escape text for the `input text` primitive.
///
/// Newlines and anything outside printable ASCII are dropped; callers
/// that care should detect those up front (see [`is_ascii_printable`])
/// and warn, since partial typing is usually still useful.
pub fn escape_for_input(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        escape_char(c, &mut escaped);
    }
    escaped
}

// The whole character policy lives in this one match so the set is easy
// to audit and extend.
fn escape_char(c: char, out: &mut String) {
    match c {
        ' ' => out.push_str("%s"),
        '\'' | '"' | '`' | '\\' | '$' | '&' | ';' | '|' | '<' | '>' | '(' | ')' | '[' | ']'
        | '{' | '}' | '!' | '*' | '?' | '~' | '#' => {
            out.push('\\');
            out.push(c);
        }
        // input text cannot represent newlines
        '\n' => {}
        '\t' => out.push_str("%s%s%s%s"),
        c if (' '..='~').contains(&c) => out.push(c),
        // Non-ASCII and remaining control characters are unsupported
        _ => {}
    }
}

/// True iff every character is printable ASCII (code points 32..=126).
pub fn is_ascii_printable(text: &str) -> bool {
    text.chars().all(|c| (' '..='~').contains(&c))
}

/// Quote a string as a single shell argument (POSIX single-quote style).
pub fn escape_shell_arg(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Split text into escaped chunks, each at most `max_length` bytes once
/// escaped. Chunks concatenate on-device, so order must be preserved.
///
/// Empty input yields no chunks. A zero `max_length` is a caller contract
/// violation.
pub fn split_text_for_input(text: &str, max_length: usize) -> Result<Vec<String>> {
    if max_length == 0 {
        return Err(AdbError::InvalidInput(
            "chunk length must be positive".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        let mut escaped = String::new();
        escape_char(c, &mut escaped);
        if current.len() + escaped.len() > max_length {
            if !current.is_empty() {
                chunks.push(current);
            }
            current = escaped;
        } else {
            current.push_str(&escaped);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_spaces() {
        assert_eq!(escape_for_input("hello world"), "hello%sworld");
    }

    #[test]
    fn test_escape_shell_specials() {
        assert_eq!(escape_for_input("$HOME"), "\\$HOME");
        assert_eq!(escape_for_input("a&b;c"), "a\\&b\\;c");
        assert_eq!(escape_for_input("(1*2)?"), "\\(1\\*2\\)\\?");
        assert_eq!(escape_for_input("it's \"q\""), "it\\'s%s\\\"q\\\"");
        assert_eq!(escape_for_input("a\\b"), "a\\\\b");
        assert_eq!(escape_for_input("`cmd`"), "\\`cmd\\`");
    }

    #[test]
    fn test_escape_drops_newlines_and_non_ascii() {
        assert_eq!(escape_for_input("line1\nline2"), "line1line2");
        assert_eq!(escape_for_input("café"), "caf");
        assert_eq!(escape_for_input("日本語"), "");
        assert_eq!(escape_for_input("\u{7}bell"), "bell");
    }

    #[test]
    fn test_escape_tab_as_spaces() {
        assert_eq!(escape_for_input("a\tb"), "a%s%s%s%sb");
    }

    #[test]
    fn test_is_ascii_printable() {
        assert!(is_ascii_printable("Hello, World! 123"));
        assert!(!is_ascii_printable("café"));
        assert!(!is_ascii_printable("line\nbreak"));
        assert!(is_ascii_printable(""));
    }

    #[test]
    fn test_escape_shell_arg() {
        assert_eq!(escape_shell_arg("it's"), "'it'\\''s'");
        assert_eq!(escape_shell_arg("plain"), "'plain'");
        assert_eq!(escape_shell_arg(""), "''");
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_text_for_input("", 10).unwrap().is_empty());
        assert!(split_text_for_input("", 1).unwrap().is_empty());
    }

    #[test]
    fn test_split_zero_length_rejected() {
        assert!(matches!(
            split_text_for_input("abc", 0),
            Err(AdbError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_split_single_chunk() {
        let chunks = split_text_for_input("hello", 100).unwrap();
        assert_eq!(chunks, vec!["hello"]);
    }

    #[test]
    fn test_split_respects_max_length() {
        let text = "a".repeat(25);
        let chunks = split_text_for_input(&text, 10).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() <= 10 && !c.is_empty()));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_split_never_splits_an_escape_sequence() {
        // Each space escapes to two bytes; a chunk boundary must not fall
        // inside a "%s".
        let chunks = split_text_for_input("a b c d e", 3).unwrap();
        for chunk in &chunks {
            assert!(chunk.len() <= 3);
            assert!(!chunk.ends_with('%'));
        }
        assert_eq!(chunks.concat(), "a%sb%sc%sd%se");
    }

    #[test]
    fn test_split_preserves_order() {
        let chunks = split_text_for_input("abcdefghij", 4).unwrap();
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }
}
