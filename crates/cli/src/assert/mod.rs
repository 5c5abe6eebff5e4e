// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report assertions.
//!
//! Compares an actual run result against an expected [`Pattern`] and turns
//! every mismatch into data: a pass/fail tally, structured differences and a
//! human-readable log. Nothing here returns an error; malformed patterns are
//! rejected earlier, when they are loaded.

mod includes;
pub mod log;
mod matcher;

use serde::Serialize;
use serde_json::Value;

use crate::pattern::{Pattern, PatternError};

use matcher::Matcher;

/// Root path of the result document.
pub const LHR_ROOT: &str = "lhr";
/// Root path of the collected artifacts.
pub const ARTIFACTS_ROOT: &str = "artifacts";

/// One failed comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    /// Dotted path of the compared value.
    pub path: String,
    /// Rendered expectation.
    pub expected: String,
    /// Actual value; `None` when it was missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<Value>,
}

/// Outcome of matching a document against a pattern.
///
/// `passed + failed` is the number of comparisons performed, and `log` is
/// empty exactly when nothing failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionReport {
    pub passed: usize,
    pub failed: usize,
    pub log: String,
    pub differences: Vec<Difference>,
}

impl AssertionReport {
    fn from_matcher(matcher: Matcher) -> Self {
        let log = log::render_plain(&matcher.differences);
        AssertionReport {
            passed: matcher.passed,
            failed: matcher.failed,
            log,
            differences: matcher.differences,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Total number of comparisons.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Output of one audit run.
#[derive(Debug, Clone, Default)]
pub struct RunnerResult {
    pub lhr: Value,
    pub artifacts: Value,
}

impl RunnerResult {
    pub fn new(lhr: Value) -> Self {
        RunnerResult {
            lhr,
            artifacts: Value::Object(Default::default()),
        }
    }

    pub fn with_artifacts(mut self, artifacts: Value) -> Self {
        self.artifacts = artifacts;
        self
    }
}

/// Expected patterns for one audit run.
#[derive(Debug, Clone)]
pub struct Expectations {
    pub lhr: Pattern,
    pub artifacts: Option<Pattern>,
}

impl Expectations {
    /// Load from a `{"lhr": ..., "artifacts": ...}` document.
    pub fn from_json(value: &Value) -> Result<Self, PatternError> {
        let Some(map) = value.as_object() else {
            return Err(PatternError::MissingLhr);
        };
        if let Some(key) = map.keys().find(|k| *k != LHR_ROOT && *k != ARTIFACTS_ROOT) {
            return Err(PatternError::UnknownExpectationKey(key.clone()));
        }
        let lhr = map.get(LHR_ROOT).ok_or(PatternError::MissingLhr)?;
        Ok(Expectations {
            lhr: Pattern::from_json(lhr)?,
            artifacts: map.get(ARTIFACTS_ROOT).map(Pattern::from_json).transpose()?,
        })
    }
}

/// Match a run result against its expectations.
pub fn get_assertion_report(actual: &RunnerResult, expected: &Expectations) -> AssertionReport {
    let mut matcher = Matcher::default();
    matcher.check(LHR_ROOT, &expected.lhr, Some(&actual.lhr));
    if let Some(artifacts) = &expected.artifacts {
        matcher.check(ARTIFACTS_ROOT, artifacts, Some(&actual.artifacts));
    }
    tracing::debug!(
        passed = matcher.passed,
        failed = matcher.failed,
        "assertion report"
    );
    AssertionReport::from_matcher(matcher)
}

/// Match a bare value against a pattern, with paths relative to the value.
pub fn match_value(actual: &Value, pattern: &Pattern) -> AssertionReport {
    let mut matcher = Matcher::default();
    matcher.check("", pattern, Some(actual));
    AssertionReport::from_matcher(matcher)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
