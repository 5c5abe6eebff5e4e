// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Smoke-test assertions for audit pipeline results.
//!
//! Two independent pieces live here:
//! - [`assert`]: matches an actual result document against an expected
//!   [`pattern::Pattern`] and reports every mismatch.
//! - [`config`]: resolves a declarative audit-pipeline configuration
//!   (extension, settings merge, filtering, validation).

pub mod assert;
pub mod cli;
pub mod color;
pub mod config;
pub mod json_path;
pub mod load;
pub mod logging;
pub mod pattern;

#[cfg(test)]
pub mod test_utils;
