// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gathering passes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use super::catalog;
use super::defaults::pass::{DEFAULT_PASS_NAME, DEVTOOLS_QUIET_THRESHOLD_MS};

/// What happens when the page fails to load during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadFailureMode {
    #[default]
    Fatal,
    Warn,
    Ignore,
}

/// A gatherer as written in a pass: `"id"` or `{"path": "id"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum GathererJson {
    Path(String),
    Defn { path: String },
}

impl GathererJson {
    fn into_path(self) -> String {
        match self {
            GathererJson::Path(path) | GathererJson::Defn { path } => path,
        }
    }
}

/// A pass as written in a config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PassJson {
    pass_name: Option<String>,
    record_trace: Option<bool>,
    load_failure_mode: Option<LoadFailureMode>,
    pause_after_fcp_ms: Option<u64>,
    pause_after_load_ms: Option<u64>,
    network_quiet_threshold_ms: Option<u64>,
    cpu_quiet_threshold_ms: Option<u64>,
    #[serde(default)]
    gatherers: Vec<GathererJson>,
}

/// A resolved pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pass {
    pub pass_name: String,
    pub record_trace: bool,
    pub load_failure_mode: LoadFailureMode,
    pub pause_after_fcp_ms: u64,
    pub pause_after_load_ms: u64,
    pub network_quiet_threshold_ms: u64,
    pub cpu_quiet_threshold_ms: u64,
    /// Gatherer ids, deduplicated in first-seen order.
    pub gatherers: Vec<String>,
}

impl Pass {
    fn from_json(json: PassJson) -> Self {
        let mut gatherers: Vec<String> = Vec::new();
        for gatherer in json.gatherers {
            let path = gatherer.into_path();
            if !gatherers.contains(&path) {
                gatherers.push(path);
            }
        }
        Pass {
            pass_name: json
                .pass_name
                .unwrap_or_else(|| DEFAULT_PASS_NAME.to_string()),
            record_trace: json.record_trace.unwrap_or(false),
            load_failure_mode: json.load_failure_mode.unwrap_or_default(),
            pause_after_fcp_ms: json.pause_after_fcp_ms.unwrap_or(0),
            pause_after_load_ms: json.pause_after_load_ms.unwrap_or(0),
            network_quiet_threshold_ms: json.network_quiet_threshold_ms.unwrap_or(0),
            cpu_quiet_threshold_ms: json.cpu_quiet_threshold_ms.unwrap_or(0),
            gatherers,
        }
    }

    /// Artifacts this pass produces through its gatherers.
    pub fn artifacts(&self) -> impl Iterator<Item = String> + '_ {
        self.gatherers.iter().map(|g| catalog::artifact_name(g))
    }

    pub fn is_default_pass(&self) -> bool {
        self.pass_name == DEFAULT_PASS_NAME
    }
}

/// Resolve passes, rejecting duplicate names and unknown gatherers.
pub(super) fn resolve(passes: Vec<PassJson>) -> Result<Vec<Pass>, ConfigError> {
    let mut names = HashSet::new();
    let mut resolved = Vec::with_capacity(passes.len());
    for json in passes {
        let pass = Pass::from_json(json);
        if !names.insert(pass.pass_name.clone()) {
            return Err(ConfigError::DuplicatePassName(pass.pass_name));
        }
        if let Some(unknown) = pass.gatherers.iter().find(|g| !catalog::is_known_gatherer(g)) {
            return Err(ConfigError::GathererNotFound(unknown.clone()));
        }
        resolved.push(pass);
    }
    Ok(resolved)
}

/// Raise `defaultPass` quiet windows to the devtools throttling floor.
pub(super) fn apply_devtools_thresholds(passes: &mut [Pass]) {
    for pass in passes.iter_mut().filter(|pass| pass.is_default_pass()) {
        for threshold in [
            &mut pass.pause_after_fcp_ms,
            &mut pass.pause_after_load_ms,
            &mut pass.network_quiet_threshold_ms,
            &mut pass.cpu_quiet_threshold_ms,
        ] {
            *threshold = (*threshold).max(DEVTOOLS_QUIET_THRESHOLD_MS);
        }
    }
}

/// Force the first pass to be fatal; returns a warning when it was not.
pub(super) fn enforce_fatal_first_pass(passes: &mut [Pass]) -> Option<String> {
    let first = passes.first_mut()?;
    if first.load_failure_mode == LoadFailureMode::Fatal {
        return None;
    }
    first.load_failure_mode = LoadFailureMode::Fatal;
    Some(format!(
        "\"{}\" is the first pass but was marked as non-fatal. \
         The first pass will always be treated as loadFailureMode=fatal.",
        first.pass_name
    ))
}

#[cfg(test)]
#[path = "passes_tests.rs"]
mod tests;
