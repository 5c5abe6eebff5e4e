// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::config::{audits, passes};
use serde_json::json;

fn audit_defns(value: Value) -> Vec<AuditDefn> {
    audits::expand(serde_json::from_value(value).unwrap()).unwrap()
}

fn resolved_passes(value: Value) -> Vec<Pass> {
    passes::resolve(serde_json::from_value(value).unwrap()).unwrap()
}

fn categories(
    value: Value,
    audits: &[AuditDefn],
    groups: Value,
) -> Result<BTreeMap<String, Category>, ConfigError> {
    let groups: BTreeMap<String, Group> = serde_json::from_value(groups).unwrap();
    resolve_categories(serde_json::from_value(value).unwrap(), audits, &groups)
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[test]
fn valid_category_resolves() {
    let audits = audit_defns(json!(["metrics/speed-index"]));
    let resolved = categories(
        json!({ "perf": {
            "title": "Perf",
            "description": "Fast",
            "auditRefs": [{ "id": "speed-index", "weight": 2.5, "group": "metrics" }],
        }}),
        &audits,
        json!({ "metrics": { "title": "Metrics" } }),
    )
    .unwrap();
    let perf = &resolved["perf"];
    assert_eq!(perf.title, "Perf");
    assert_eq!(perf.description.as_deref(), Some("Fast"));
    assert_eq!(
        perf.audit_refs,
        vec![AuditRef {
            id: "speed-index".to_string(),
            weight: 2.5,
            group: Some("metrics".to_string()),
        }]
    );
}

#[test]
fn non_object_ref_is_missing_its_id() {
    let audits = audit_defns(json!(["metrics/speed-index"]));
    let err = categories(
        json!({ "perf": { "auditRefs": [{ "id": "speed-index" }, "speed-index"] } }),
        &audits,
        json!({}),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingAuditId { ref category, index: 1 } if category == "perf"
    ));
}

#[test]
fn unknown_audit_is_reported_before_group_checks() {
    let err = categories(
        json!({ "accessibility": { "auditRefs": [{ "id": "image-alt" }] } }),
        &[],
        json!({}),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownAudit { .. }));
}

#[test]
fn manual_accessibility_audit_needs_no_group() {
    let audits = audit_defns(json!(["manual/pwa-cross-browser"]));
    let resolved = categories(
        json!({ "accessibility": { "auditRefs": [{ "id": "pwa-cross-browser", "weight": 0 }] } }),
        &audits,
        json!({}),
    )
    .unwrap();
    assert_eq!(resolved["accessibility"].audit_refs.len(), 1);
}

#[test]
fn manual_audit_with_zero_weight_is_allowed_elsewhere() {
    let audits = audit_defns(json!(["manual/pwa-cross-browser"]));
    assert!(
        categories(
            json!({ "pwa": { "auditRefs": [{ "id": "pwa-cross-browser" }] } }),
            &audits,
            json!({}),
        )
        .is_ok()
    );
}

// =============================================================================
// ARTIFACTS
// =============================================================================

#[test]
fn without_passes_only_base_artifacts_exist() {
    let available = available_artifacts(&[]);
    assert!(available.contains("URL"));
    assert!(!available.contains("devtoolsLogs"));
    assert!(!available.contains("traces"));
}

#[test]
fn passes_add_logs_traces_and_gatherer_artifacts() {
    let quiet = available_artifacts(&resolved_passes(json!([{ "gatherers": ["doctype"] }])));
    assert!(quiet.contains("devtoolsLogs"));
    assert!(quiet.contains("Doctype"));
    assert!(!quiet.contains("traces"));

    let tracing = available_artifacts(&resolved_passes(json!([{ "recordTrace": true }])));
    assert!(tracing.contains("traces"));
}

#[test]
fn optional_artifacts_are_not_required() {
    let audits = audit_defns(json!(["errors-in-console"]));
    let passes = resolved_passes(json!([{ "gatherers": ["console-messages"] }]));
    assert!(validate_artifacts(&audits, &passes).is_ok());
}

#[test]
fn first_missing_artifact_is_reported() {
    let audits = audit_defns(json!(["unused-css-rules"]));
    let passes = resolved_passes(json!([{ "recordTrace": true }]));
    let err = validate_artifacts(&audits, &passes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CssUsage gatherer, required by audit unused-css-rules, was not found in config"
    );
}
