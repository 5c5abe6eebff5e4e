// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure log rendering.
//!
//! Actual values may carry terminal escape sequences (console messages often
//! do). Comparisons see them raw; the log strips them so it stays readable
//! and stable.

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use termcolor::{Buffer, WriteColor};

use super::Difference;
use crate::color::scheme;

/// CSI (`ESC [ ... m`) and OSC (`ESC ] ... BEL`) sequences.
#[allow(clippy::expect_used)]
static ANSI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .expect("valid regex pattern")
});

/// Longest rendered value before truncation, in characters.
const MAX_VALUE_CHARS: usize = 400;

/// Marker used when a value is missing.
pub const MISSING: &str = "(missing)";

/// Remove terminal escape sequences.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_PATTERN.replace_all(text, "")
}

fn strip_value(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(strip_ansi(text).into_owned()),
        Value::Array(items) => Value::Array(items.iter().map(strip_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (strip_ansi(k).into_owned(), strip_value(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Compact, escape-free rendering of an actual value.
pub fn render_value(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };
    truncate(strip_value(value).to_string())
}

fn truncate(text: String) -> String {
    match text.char_indices().nth(MAX_VALUE_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text,
    }
}

/// Write one block per difference, separated by newlines.
pub fn write_differences<W: WriteColor>(out: &mut W, differences: &[Difference]) -> io::Result<()> {
    for (i, difference) in differences.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        out.set_color(&scheme::fail())?;
        write!(out, "✘ difference")?;
        out.reset()?;
        write!(out, " at ")?;
        out.set_color(&scheme::path())?;
        write!(out, "{}", difference.path)?;
        out.reset()?;
        writeln!(out)?;

        out.set_color(&scheme::label())?;
        write!(out, "    expected: ")?;
        out.reset()?;
        writeln!(out, "{}", strip_ansi(&difference.expected))?;

        out.set_color(&scheme::label())?;
        write!(out, "       found: ")?;
        out.reset()?;
        write!(out, "{}", render_value(difference.found.as_ref()))?;
    }
    Ok(())
}

/// The log as plain text, with no color codes.
pub fn render_plain(differences: &[Difference]) -> String {
    let mut buffer = Buffer::no_color();
    // Writing to an in-memory buffer cannot fail.
    let _ = write_differences(&mut buffer, differences);
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
