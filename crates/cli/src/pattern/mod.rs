// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected-value patterns.
//!
//! A pattern mirrors part of an actual document, but any leaf or container
//! may be replaced by an operator:
//! - literals compare by equality (numbers numerically)
//! - `">N"`, `"<N"`, `">=N"`, `"<=N"` compare numerically
//! - `{"_regex": "..."}` searches a string
//! - `{"_includes": [...], "_excludes": [...]}` are set checks on arrays
//! - `{"length": ...}` checks an array's element count
//!
//! Patterns are resolved once at load time; matching never looks at the raw
//! JSON again.

mod parse;
mod range;

use std::fmt;

use regex::Regex;
use serde_json::{Map, Value};

pub use parse::PatternError;
pub use range::{RangeBound, RangeOp};

/// Key of an object holding a regular expression.
pub const REGEX_KEY: &str = "_regex";
/// Key of the patterns that must each claim a distinct array element.
pub const INCLUDES_KEY: &str = "_includes";
/// Key of the patterns that must not match any unclaimed array element.
pub const EXCLUDES_KEY: &str = "_excludes";
/// Key of an array length assertion.
pub const LENGTH_KEY: &str = "length";

/// A resolved expected-value pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Null, boolean, number or string compared by equality.
    Literal(Value),
    /// Numeric comparison against a bound.
    Range(RangeBound),
    /// A string shaped like a range operator whose bound does not parse.
    /// Always fails, so a typo never degrades into a literal comparison.
    InvalidRange { text: String, reason: String },
    /// Unanchored search in a string.
    Regex(Regex),
    /// Set checks on an array. `None` means the key was absent.
    Set {
        includes: Option<Vec<Pattern>>,
        excludes: Option<Vec<Pattern>>,
    },
    /// Element count of an array (or character count of a string).
    Length(Box<Pattern>),
    /// Positional match against an array.
    Sequence(Vec<Pattern>),
    /// Per-key match against an object, in authored key order.
    Mapping(Vec<(String, Pattern)>),
}

impl Pattern {
    /// Load a pattern from JSON.
    pub fn from_json(value: &Value) -> Result<Self, PatternError> {
        parse::parse(value, "")
    }

    /// JSON rendering used in failure messages.
    ///
    /// Regexes render as `/source/` and range operators as their text, so
    /// the output is readable rather than loadable.
    pub fn display_json(&self) -> Value {
        match self {
            Pattern::Literal(value) => value.clone(),
            Pattern::Range(bound) => Value::String(bound.to_string()),
            Pattern::InvalidRange { text, .. } => Value::String(text.clone()),
            Pattern::Regex(regex) => Value::String(format!("/{}/", regex.as_str())),
            Pattern::Set { includes, excludes } => {
                let mut map = Map::new();
                if let Some(includes) = includes {
                    map.insert(INCLUDES_KEY.to_string(), display_all(includes));
                }
                if let Some(excludes) = excludes {
                    map.insert(EXCLUDES_KEY.to_string(), display_all(excludes));
                }
                Value::Object(map)
            }
            Pattern::Length(inner) => {
                let mut map = Map::new();
                map.insert(LENGTH_KEY.to_string(), inner.display_json());
                Value::Object(map)
            }
            Pattern::Sequence(items) => display_all(items),
            Pattern::Mapping(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, pattern)| (key.clone(), pattern.display_json()))
                    .collect(),
            ),
        }
    }
}

fn display_all(patterns: &[Pattern]) -> Value {
    Value::Array(patterns.iter().map(Pattern::display_json).collect())
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Range(bound) => write!(f, "{bound}"),
            Pattern::InvalidRange { text, .. } => f.write_str(text),
            Pattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
            other => f.write_str(&other.display_json().to_string()),
        }
    }
}

impl TryFrom<&Value> for Pattern {
    type Error = PatternError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Pattern::from_json(value)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
