// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config extension: layering a user config over a base config.

use serde_json::Value;

/// Deep-merge `extension` into `base`.
///
/// Objects merge key by key. Arrays concatenate unless `overwrite_arrays`.
/// A null extension keeps the base; any other value replaces it.
pub fn merge_fragment(base: Value, extension: Value, overwrite_arrays: bool) -> Value {
    match (base, extension) {
        (base, Value::Null) => base,
        (Value::Object(mut base), Value::Object(extension)) => {
            for (key, value) in extension {
                match base.get_mut(&key) {
                    Some(slot) => {
                        let current = std::mem::take(slot);
                        *slot = merge_fragment(current, value, overwrite_arrays);
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        (Value::Array(mut base), Value::Array(extension)) if !overwrite_arrays => {
            base.extend(extension);
            Value::Array(base)
        }
        (_, extension) => extension,
    }
}

fn pass_name(pass: &Value) -> Option<&str> {
    pass.get("passName").and_then(Value::as_str)
}

/// Merge passes by `passName`; unnamed extension passes are appended.
fn merge_passes(base: Vec<Value>, extension: Vec<Value>) -> Vec<Value> {
    let mut passes = base;
    for pass in extension {
        let target = pass_name(&pass).and_then(|name| {
            passes
                .iter_mut()
                .find(|candidate| pass_name(candidate) == Some(name))
        });
        match target {
            Some(slot) => {
                let current = std::mem::take(slot);
                *slot = merge_fragment(current, pass, false);
            }
            None => passes.push(pass),
        }
    }
    passes
}

/// Layer `extension` over `base`.
///
/// Passes merge by name (gatherers concatenate, other fields are
/// overwritten), settings merge with arrays replaced, and everything else
/// deep-merges with arrays concatenated.
pub fn extend_config_json(base: Value, extension: Value) -> Value {
    let mut base = match base {
        Value::Object(base) => base,
        _ => return extension,
    };
    let Value::Object(extension) = extension else {
        return Value::Object(base);
    };

    for (key, value) in extension {
        let current = base.get_mut(&key).map(std::mem::take);
        let merged = match (key.as_str(), current, value) {
            (_, None, value) => value,
            ("passes", Some(Value::Array(current)), Value::Array(value)) => {
                Value::Array(merge_passes(current, value))
            }
            ("settings", Some(current), value) => merge_fragment(current, value, true),
            (_, Some(current), value) => merge_fragment(current, value, false),
        };
        base.insert(key, merged);
    }
    Value::Object(base)
}

#[cfg(test)]
#[path = "extend_tests.rs"]
mod tests;
