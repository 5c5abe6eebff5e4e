// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive descent over a pattern and the actual value it mirrors.

use serde_json::Value;

use super::Difference;
use super::includes;
use crate::json_path;
use crate::pattern::{EXCLUDES_KEY, INCLUDES_KEY, LENGTH_KEY, Pattern};

/// Accumulates comparison outcomes in traversal order.
#[derive(Debug, Default)]
pub(super) struct Matcher {
    pub passed: usize,
    pub failed: usize,
    pub differences: Vec<Difference>,
    /// Count outcomes without recording differences.
    trial: bool,
}

impl Matcher {
    /// A matcher that only counts, for matches whose differences are
    /// discarded.
    pub fn trial() -> Self {
        Self {
            trial: true,
            ..Self::default()
        }
    }

    /// Compare `actual` (absent when `None`) against `pattern` at `path`.
    pub fn check(&mut self, path: &str, pattern: &Pattern, actual: Option<&Value>) {
        let Some(actual) = actual else {
            self.fail(path, || pattern.to_string(), None);
            return;
        };

        match pattern {
            Pattern::Literal(expected) => {
                self.leaf(literal_matches(expected, actual), path, pattern, actual)
            }
            Pattern::Range(bound) => {
                let ok = actual.as_f64().is_some_and(|n| bound.contains(n));
                self.leaf(ok, path, pattern, actual);
            }
            Pattern::InvalidRange { text, reason } => {
                self.fail(
                    path,
                    || format!("{text} (invalid range: {reason})"),
                    Some(actual),
                );
            }
            Pattern::Regex(regex) => {
                let ok = actual.as_str().is_some_and(|s| regex.is_match(s));
                self.leaf(ok, path, pattern, actual);
            }
            Pattern::Mapping(fields) => self.check_mapping(path, pattern, fields, actual),
            Pattern::Sequence(items) => self.check_sequence(path, pattern, items, actual),
            Pattern::Length(inner) => self.check_length(path, pattern, inner, actual),
            Pattern::Set { includes, excludes } => self.check_set(
                path,
                pattern,
                includes.as_deref(),
                excludes.as_deref(),
                actual,
            ),
        }
    }

    fn pass(&mut self) {
        self.passed += 1;
    }

    fn fail(&mut self, path: &str, expected: impl FnOnce() -> String, found: Option<&Value>) {
        self.failed += 1;
        if self.trial {
            return;
        }
        self.differences.push(Difference {
            path: json_path::display(path).to_string(),
            expected: expected(),
            found: found.cloned(),
        });
    }

    fn leaf(&mut self, ok: bool, path: &str, pattern: &Pattern, actual: &Value) {
        if ok {
            self.pass();
        } else {
            self.fail(path, || pattern.to_string(), Some(actual));
        }
    }

    fn check_mapping(
        &mut self,
        path: &str,
        pattern: &Pattern,
        fields: &[(String, Pattern)],
        actual: &Value,
    ) {
        if fields.is_empty() {
            self.leaf(actual.is_object(), path, pattern, actual);
            return;
        }
        match actual {
            Value::Object(map) => {
                for (key, field) in fields {
                    self.check(&json_path::key(path, key), field, map.get(key));
                }
            }
            Value::Array(items) => {
                let length = Value::from(items.len());
                for (key, field) in fields {
                    if key == LENGTH_KEY {
                        self.check(&json_path::key(path, key), field, Some(&length));
                    } else if let Ok(index) = key.parse::<usize>() {
                        self.check(&json_path::index(path, index), field, items.get(index));
                    } else {
                        self.check(&json_path::key(path, key), field, None);
                    }
                }
            }
            _ => self.fail(path, || pattern.to_string(), Some(actual)),
        }
    }

    fn check_sequence(&mut self, path: &str, pattern: &Pattern, items: &[Pattern], actual: &Value) {
        let Value::Array(elements) = actual else {
            self.fail(path, || pattern.to_string(), Some(actual));
            return;
        };
        if items.is_empty() {
            self.leaf(elements.is_empty(), path, pattern, actual);
            return;
        }
        for (i, item) in items.iter().enumerate() {
            self.check(&json_path::index(path, i), item, elements.get(i));
        }
    }

    fn check_length(&mut self, path: &str, pattern: &Pattern, inner: &Pattern, actual: &Value) {
        let length_path = json_path::key(path, LENGTH_KEY);
        let count = match actual {
            Value::Array(items) => items.len(),
            Value::String(text) => text.chars().count(),
            Value::Object(map) => {
                self.check(&length_path, inner, map.get(LENGTH_KEY));
                return;
            }
            _ => {
                self.fail(path, || pattern.to_string(), Some(actual));
                return;
            }
        };
        self.check(&length_path, inner, Some(&Value::from(count)));
    }

    fn check_set(
        &mut self,
        path: &str,
        pattern: &Pattern,
        includes: Option<&[Pattern]>,
        excludes: Option<&[Pattern]>,
        actual: &Value,
    ) {
        let Value::Array(elements) = actual else {
            self.fail(path, || pattern.to_string(), Some(actual));
            return;
        };

        let mut claimed = vec![false; elements.len()];

        if let Some(includes) = includes {
            let edges: Vec<Vec<usize>> = includes
                .iter()
                .map(|p| {
                    elements
                        .iter()
                        .enumerate()
                        .filter(|(_, element)| is_match(p, element))
                        .map(|(j, _)| j)
                        .collect()
                })
                .collect();
            let assignment = includes::assign(&edges, elements.len());

            for element in assignment.iter().flatten() {
                if let Some(flag) = claimed.get_mut(*element) {
                    *flag = true;
                }
            }

            let unmatched: Vec<Value> = includes
                .iter()
                .zip(&assignment)
                .filter(|(_, slot)| slot.is_none())
                .map(|(p, _)| p.display_json())
                .collect();
            if unmatched.is_empty() {
                self.pass();
            } else {
                self.fail(
                    &json_path::key(path, INCLUDES_KEY),
                    || format!("to include {}", Value::Array(unmatched)),
                    Some(actual),
                );
            }
        }

        if let Some(excludes) = excludes {
            let excludes_path = json_path::key(path, EXCLUDES_KEY);
            for (i, p) in excludes.iter().enumerate() {
                let hit = elements
                    .iter()
                    .zip(&claimed)
                    .find(|(element, taken)| !**taken && is_match(p, element))
                    .map(|(element, _)| element);
                match hit {
                    Some(element) => self.fail(
                        &json_path::index(&excludes_path, i),
                        || format!("not to find {p}"),
                        Some(element),
                    ),
                    None => self.pass(),
                }
            }
        }
    }
}

/// Whether `actual` satisfies `pattern` as a whole.
pub(super) fn is_match(pattern: &Pattern, actual: &Value) -> bool {
    let mut matcher = Matcher::trial();
    matcher.check("", pattern, Some(actual));
    matcher.failed == 0
}

/// Strict equality, except that an integer equals a float of the same value.
fn literal_matches(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) if e.is_f64() || a.is_f64() => {
            e.as_f64() == a.as_f64()
        }
        _ => expected == actual,
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
