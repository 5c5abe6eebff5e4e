// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;

fn difference(path: &str, expected: &str, found: Option<Value>) -> Difference {
    Difference {
        path: path.to_string(),
        expected: expected.to_string(),
        found,
    }
}

#[test]
fn strip_ansi_removes_color_codes() {
    assert_eq!(strip_ansi("\u{1b}[31mRed\u{1b}[39m error"), "Red error");
    assert_eq!(strip_ansi("\u{1b}[1;4mbold\u{1b}[0m"), "bold");
}

#[test]
fn strip_ansi_removes_hyperlinks() {
    let text = "\u{1b}]8;;https://example.com\u{7}link\u{1b}]8;;\u{7}";
    assert_eq!(strip_ansi(text), "link");
}

#[test]
fn strip_ansi_borrows_clean_text() {
    assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
}

#[test]
fn render_value_marks_missing() {
    assert_eq!(render_value(None), "(missing)");
}

#[test]
fn render_value_strips_nested_strings() {
    let value = json!({"description": "\u{1b}[31mRed\u{1b}[39m", "n": [1, "\u{1b}[0mx"]});
    assert_eq!(render_value(Some(&value)), r#"{"description":"Red","n":[1,"x"]}"#);
}

#[test]
fn render_value_truncates_long_values() {
    let value = json!("a".repeat(1000));
    let rendered = render_value(Some(&value));
    assert!(rendered.ends_with('…'));
    assert_eq!(rendered.chars().count(), MAX_VALUE_CHARS + 1);
}

#[test]
fn plain_log_is_empty_without_differences() {
    assert_eq!(render_plain(&[]), "");
}

#[test]
fn plain_log_formats_each_block() {
    let log = render_plain(&[
        difference("lhr.audits.is-on-https.score", "1234", Some(json!(0))),
        difference("lhr.audits.not-an-audit", "0", None),
    ]);
    similar_asserts::assert_eq!(
        log,
        "✘ difference at lhr.audits.is-on-https.score\n\
         \x20   expected: 1234\n\
         \x20      found: 0\n\
         ✘ difference at lhr.audits.not-an-audit\n\
         \x20   expected: 0\n\
         \x20      found: (missing)"
    );
}
