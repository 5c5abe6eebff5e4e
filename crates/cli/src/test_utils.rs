// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

use crate::assert::{Expectations, RunnerResult};

const SAMPLE_LHR: &str = include_str!("../../../tests/fixtures/assert/sample-lhr.json");

/// Reduced result document of a real run against a test page.
pub fn sample_lhr() -> Value {
    serde_json::from_str(SAMPLE_LHR).unwrap()
}

/// The sample result with empty artifacts.
pub fn sample_run() -> RunnerResult {
    RunnerResult::new(sample_lhr())
}

/// A `{"_regex": ...}` pattern value.
pub fn re(source: &str) -> Value {
    json!({ "_regex": source })
}

/// Expectations for the sample page: both URLs plus the given `lhr` fields.
pub fn sample_expectations(fields: Value) -> Expectations {
    let mut lhr = json!({
        "requestedUrl": "http://localhost:10200/dobetterweb/dbw_tester.html",
        "finalUrl": "http://localhost:10200/dobetterweb/dbw_tester.html",
    });
    if let (Some(target), Value::Object(extra)) = (lhr.as_object_mut(), fields) {
        target.extend(extra);
    }
    Expectations::from_json(&json!({ "lhr": lhr })).unwrap()
}

/// Creates a temp file with the given content and extension.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
