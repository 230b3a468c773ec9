//! Flat `key=value` properties format.
//!
//! One pair per line. Blank lines and lines whose first non-blank character
//! is `#` or `!` are comments. The key is everything before the first `=`,
//! trimmed; the value is everything after it with leading whitespace removed.
//! There are no escapes and no line continuations.

use std::fmt::Write as _;

/// A line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

/// Parse properties text into ordered pairs.
///
/// Duplicates are kept in file order; callers that build a map get
/// last-one-wins for free.
///
/// # Errors
///
/// Returns the first line that has no `=` or an empty key.
pub fn parse(contents: &str) -> Result<Vec<(String, String)>, ParseError> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut entries = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim_start();

        if line.trim_end().is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError {
                line: idx + 1,
                reason: "expected key=value, found no '='".to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError {
                line: idx + 1,
                reason: "empty key before '='".to_string(),
            });
        }

        entries.push((key.to_string(), value.trim_start().to_string()));
    }

    Ok(entries)
}

/// Render pairs as properties text, each comment on its own `#` line first.
pub fn render<'a, I>(comments: &[&str], entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();

    for comment in comments {
        let _ = writeln!(out, "# {}", comment);
    }

    for (key, value) in entries {
        let _ = writeln!(out, "{}={}", key, value);
    }

    out
}
