// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    single_word = { "accessibility", "Accessibility" },
    two_words = { "viewport-dimensions", "ViewportDimensions" },
    three_words = { "full-page-screenshot", "FullPageScreenshot" },
    doubled_dash = { "css--usage", "CssUsage" },
)]
fn artifact_name_is_pascal_case(gatherer: &str, artifact: &str) {
    assert_eq!(artifact_name(gatherer), artifact);
}

#[test]
fn gatherer_list_is_sorted_and_unique() {
    let mut sorted = GATHERERS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, GATHERERS);
}

#[test]
fn builtin_audit_carries_artifacts_and_mode() {
    let meta = builtin_audit("unused-javascript").unwrap();
    assert_eq!(
        meta.required_artifacts,
        vec!["ScriptElements", "devtoolsLogs", "traces"]
    );
    assert_eq!(meta.optional_artifacts, vec!["SourceMaps"]);
    assert_eq!(meta.score_display_mode, ScoreDisplayMode::Numeric);

    assert_eq!(
        builtin_audit("pwa-cross-browser").unwrap().score_display_mode,
        ScoreDisplayMode::Manual
    );
    assert!(builtin_audit("not-an-audit").is_none());
}

#[test]
fn default_config_only_names_known_gatherers_and_audits() {
    let config = default_config_json();
    for pass in config["passes"].as_array().unwrap() {
        for gatherer in pass["gatherers"].as_array().unwrap() {
            let id = gatherer.as_str().unwrap();
            assert!(is_known_gatherer(id), "unknown gatherer {id}");
        }
    }
    for path in config["audits"].as_array().unwrap() {
        let id = super::super::audit_id(path.as_str().unwrap());
        assert!(builtin_audit(id).is_some(), "unknown audit {id}");
    }
}
