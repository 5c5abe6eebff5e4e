// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON to [`Pattern`] resolution.

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use super::range::{RangeBound, RangeText};
use super::{EXCLUDES_KEY, INCLUDES_KEY, LENGTH_KEY, Pattern, REGEX_KEY};
use crate::json_path;

/// A malformed expected pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("unknown reserved key `{key}` at {path}")]
    UnknownReservedKey { path: String, key: String },

    #[error("`_includes`/`_excludes` cannot be combined with other keys at {path}")]
    MixedSetKeys { path: String },

    #[error("`{key}` must hold an array at {path}")]
    ExpectedArray { path: String, key: &'static str },

    #[error("`_regex` cannot have sibling keys at {path}")]
    RegexWithSiblings { path: String },

    #[error("`_regex` must be a string at {path}")]
    RegexNotString { path: String },

    #[error("invalid regex at {path}: {source}")]
    InvalidRegex {
        path: String,
        #[source]
        source: regex::Error,
    },

    #[error("expectations must contain an `lhr` pattern")]
    MissingLhr,

    #[error("unknown expectation key `{0}` (expected `lhr` or `artifacts`)")]
    UnknownExpectationKey(String),
}

fn at(path: &str) -> String {
    json_path::display(path).to_string()
}

pub(super) fn parse(value: &Value, path: &str) -> Result<Pattern, PatternError> {
    match value {
        Value::String(text) => Ok(parse_string(text)),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse(item, &json_path::index(path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Pattern::Sequence),
        Value::Object(map) => parse_object(map, path),
        scalar => Ok(Pattern::Literal(scalar.clone())),
    }
}

fn parse_string(text: &str) -> Pattern {
    match RangeBound::classify(text) {
        RangeText::Valid(bound) => Pattern::Range(bound),
        RangeText::Invalid(reason) => Pattern::InvalidRange {
            text: text.to_string(),
            reason,
        },
        RangeText::NotARange => Pattern::Literal(Value::String(text.to_string())),
    }
}

fn parse_object(map: &Map<String, Value>, path: &str) -> Result<Pattern, PatternError> {
    if let Some(source) = map.get(REGEX_KEY) {
        if map.len() > 1 {
            return Err(PatternError::RegexWithSiblings { path: at(path) });
        }
        let Value::String(source) = source else {
            return Err(PatternError::RegexNotString { path: at(path) });
        };
        return Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|source| PatternError::InvalidRegex {
                path: at(path),
                source,
            });
    }

    if let Some(key) = map
        .keys()
        .find(|key| key.starts_with('_') && !is_set_key(key))
    {
        return Err(PatternError::UnknownReservedKey {
            path: at(path),
            key: key.clone(),
        });
    }

    if map.keys().any(|key| is_set_key(key)) {
        if map.keys().any(|key| !is_set_key(key)) {
            return Err(PatternError::MixedSetKeys { path: at(path) });
        }
        return Ok(Pattern::Set {
            includes: parse_set_operand(map, INCLUDES_KEY, path)?,
            excludes: parse_set_operand(map, EXCLUDES_KEY, path)?,
        });
    }

    if map.len() == 1
        && let Some(length) = map.get(LENGTH_KEY)
    {
        let inner = parse(length, &json_path::key(path, LENGTH_KEY))?;
        return Ok(Pattern::Length(Box::new(inner)));
    }

    map.iter()
        .map(|(key, value)| {
            parse(value, &json_path::key(path, key)).map(|pattern| (key.clone(), pattern))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Pattern::Mapping)
}

fn is_set_key(key: &str) -> bool {
    key == INCLUDES_KEY || key == EXCLUDES_KEY
}

fn parse_set_operand(
    map: &Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<Option<Vec<Pattern>>, PatternError> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    let operand_path = json_path::key(path, key);
    let Value::Array(items) = value else {
        return Err(PatternError::ExpectedArray {
            path: at(&operand_path),
            key,
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item, &json_path::index(&operand_path, i)))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
