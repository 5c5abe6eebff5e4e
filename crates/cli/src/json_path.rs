// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dotted paths into JSON documents (`lhr.audits.foo.details.items[0]`).

/// Label used when a path has no segments.
pub const ROOT: &str = "(root)";

/// Append an object key to a path.
pub fn key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Append an array index to a path.
pub fn index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Render a path for display, naming the root explicitly.
pub fn display(path: &str) -> &str {
    if path.is_empty() { ROOT } else { path }
}

#[cfg(test)]
#[path = "json_path_tests.rs"]
mod tests;
