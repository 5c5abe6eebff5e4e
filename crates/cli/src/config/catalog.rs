// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in gatherers, audits and the default configuration.
//!
//! Everything here is declarative: a gatherer is an id whose artifact name
//! is derived from it, an audit is a set of artifact requirements.

use serde_json::{Value, json};

use super::audits::ScoreDisplayMode::{Binary, Informative, Manual, Numeric};
use super::audits::{AuditMeta, ScoreDisplayMode};

/// Gatherer ids available to passes.
pub const GATHERERS: &[&str] = &[
    "accessibility",
    "console-messages",
    "css-usage",
    "doctype",
    "full-page-screenshot",
    "http-redirect",
    "image-elements",
    "inspector-issues",
    "js-usage",
    "link-elements",
    "main-document-content",
    "meta-elements",
    "robots-txt",
    "script-elements",
    "service-worker",
    "source-maps",
    "trace-elements",
    "viewport-dimensions",
];

pub fn is_known_gatherer(id: &str) -> bool {
    GATHERERS.contains(&id)
}

/// Artifact produced by a gatherer: `viewport-dimensions` -> `ViewportDimensions`.
pub fn artifact_name(gatherer: &str) -> String {
    gatherer
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

struct BuiltinAudit {
    id: &'static str,
    required: &'static [&'static str],
    optional: &'static [&'static str],
    mode: ScoreDisplayMode,
}

const fn audit(
    id: &'static str,
    required: &'static [&'static str],
    optional: &'static [&'static str],
    mode: ScoreDisplayMode,
) -> BuiltinAudit {
    BuiltinAudit {
        id,
        required,
        optional,
        mode,
    }
}

const TRACE_AND_LOG: &[&str] = &["traces", "devtoolsLogs"];
const A11Y: &[&str] = &["Accessibility"];

const BUILTIN_AUDITS: &[BuiltinAudit] = &[
    audit("first-contentful-paint", TRACE_AND_LOG, &[], Numeric),
    audit("largest-contentful-paint", TRACE_AND_LOG, &[], Numeric),
    audit("first-meaningful-paint", TRACE_AND_LOG, &[], Numeric),
    audit("speed-index", TRACE_AND_LOG, &[], Numeric),
    audit("total-blocking-time", TRACE_AND_LOG, &[], Numeric),
    audit("cumulative-layout-shift", TRACE_AND_LOG, &[], Numeric),
    audit(
        "unused-javascript",
        &["ScriptElements", "devtoolsLogs", "traces"],
        &["SourceMaps"],
        Numeric,
    ),
    audit(
        "unused-css-rules",
        &["CssUsage", "URL", "devtoolsLogs", "traces"],
        &[],
        Numeric,
    ),
    audit("user-timings", &["traces"], &[], Informative),
    audit("screenshot-thumbnails", &["traces"], &[], Informative),
    audit(
        "metrics",
        &["traces", "devtoolsLogs", "GatherContext"],
        &[],
        Informative,
    ),
    audit("full-page-screenshot", &["FullPageScreenshot"], &[], Informative),
    audit("color-contrast", A11Y, &[], Binary),
    audit("image-alt", A11Y, &[], Binary),
    audit("document-title", A11Y, &[], Binary),
    audit("html-has-lang", A11Y, &[], Binary),
    audit("label", A11Y, &[], Binary),
    audit("is-on-https", &["devtoolsLogs"], &[], Binary),
    audit(
        "errors-in-console",
        &["ConsoleMessages"],
        &["InspectorIssues"],
        Binary,
    ),
    audit("doctype", &["Doctype"], &[], Binary),
    audit("image-aspect-ratio", &["ImageElements"], &[], Binary),
    audit(
        "installable-manifest",
        &["WebAppManifest", "InstallabilityErrors"],
        &[],
        Binary,
    ),
    audit(
        "service-worker",
        &["URL", "ServiceWorker", "WebAppManifest"],
        &[],
        Binary,
    ),
    audit("redirects-http", &["HttpRedirect", "URL"], &[], Binary),
    audit(
        "viewport",
        &["MetaElements", "ViewportDimensions"],
        &[],
        Binary,
    ),
    audit("apple-touch-icon", &["LinkElements"], &[], Binary),
    audit("pwa-cross-browser", &[], &[], Manual),
];

/// Metadata of a built-in audit.
pub fn builtin_audit(id: &str) -> Option<AuditMeta> {
    BUILTIN_AUDITS
        .iter()
        .find(|audit| audit.id == id)
        .map(|audit| AuditMeta {
            id: Some(audit.id.to_string()),
            required_artifacts: audit.required.iter().map(|s| s.to_string()).collect(),
            optional_artifacts: audit.optional.iter().map(|s| s.to_string()).collect(),
            score_display_mode: audit.mode,
            ..AuditMeta::default()
        })
}

/// The configuration extended by `"extends": "lighthouse:default"`.
pub fn default_config_json() -> Value {
    json!({
        "settings": {},
        "passes": [
            {
                "passName": "defaultPass",
                "recordTrace": true,
                "pauseAfterFcpMs": 1000,
                "pauseAfterLoadMs": 1000,
                "networkQuietThresholdMs": 1000,
                "cpuQuietThresholdMs": 1000,
                "gatherers": [
                    "css-usage",
                    "script-elements",
                    "console-messages",
                    "viewport-dimensions",
                    "source-maps",
                    "meta-elements",
                    "image-elements",
                    "accessibility",
                    "link-elements",
                    "doctype",
                    "inspector-issues",
                    "full-page-screenshot",
                ],
            },
            {
                "passName": "offlinePass",
                "loadFailureMode": "ignore",
                "gatherers": ["service-worker", "http-redirect"],
            },
        ],
        "audits": [
            "metrics/first-contentful-paint",
            "metrics/largest-contentful-paint",
            "metrics/first-meaningful-paint",
            "metrics/speed-index",
            "metrics/total-blocking-time",
            "metrics/cumulative-layout-shift",
            "byte-efficiency/unused-javascript",
            "byte-efficiency/unused-css-rules",
            "user-timings",
            "screenshot-thumbnails",
            "metrics",
            "full-page-screenshot",
            "accessibility/color-contrast",
            "accessibility/image-alt",
            "accessibility/document-title",
            "accessibility/html-has-lang",
            "accessibility/label",
            "is-on-https",
            "errors-in-console",
            "dobetterweb/doctype",
            "image-aspect-ratio",
            "installable-manifest",
            "service-worker",
            "redirects-http",
            "viewport",
            "apple-touch-icon",
            "manual/pwa-cross-browser",
        ],
        "groups": {
            "metrics": { "title": "Metrics" },
            "diagnostics": {
                "title": "Diagnostics",
                "description": "More information about the performance of your application."
            },
            "a11y-color-contrast": {
                "title": "Contrast",
                "description": "These are opportunities to improve the legibility of your content."
            },
            "a11y-names-labels": {
                "title": "Names and labels",
                "description": "These are opportunities to improve the semantics of the controls in your application."
            },
            "a11y-language": {
                "title": "Internationalization and localization",
                "description": "These are opportunities to improve the interpretation of your content by users in different locales."
            },
            "pwa-installable": { "title": "Installable" },
            "pwa-optimized": { "title": "PWA Optimized" },
            "best-practices-trust-safety": { "title": "Trust and Safety" },
            "best-practices-general": { "title": "General" },
        },
        "categories": {
            "performance": {
                "title": "Performance",
                "auditRefs": [
                    { "id": "first-contentful-paint", "weight": 10, "group": "metrics" },
                    { "id": "largest-contentful-paint", "weight": 25, "group": "metrics" },
                    { "id": "first-meaningful-paint", "weight": 0 },
                    { "id": "speed-index", "weight": 10, "group": "metrics" },
                    { "id": "total-blocking-time", "weight": 30, "group": "metrics" },
                    { "id": "cumulative-layout-shift", "weight": 25, "group": "metrics" },
                    { "id": "unused-javascript", "weight": 0, "group": "diagnostics" },
                    { "id": "unused-css-rules", "weight": 0, "group": "diagnostics" },
                    { "id": "user-timings", "weight": 0, "group": "diagnostics" },
                    { "id": "screenshot-thumbnails", "weight": 0 },
                    { "id": "metrics", "weight": 0 },
                ],
            },
            "accessibility": {
                "title": "Accessibility",
                "description": "These checks highlight opportunities to improve the accessibility of your web app.",
                "manualDescription": "These items address areas which an automated testing tool cannot cover.",
                "auditRefs": [
                    { "id": "color-contrast", "weight": 3, "group": "a11y-color-contrast" },
                    { "id": "image-alt", "weight": 10, "group": "a11y-names-labels" },
                    { "id": "document-title", "weight": 3, "group": "a11y-names-labels" },
                    { "id": "html-has-lang", "weight": 3, "group": "a11y-language" },
                    { "id": "label", "weight": 10, "group": "a11y-names-labels" },
                ],
            },
            "best-practices": {
                "title": "Best Practices",
                "auditRefs": [
                    { "id": "is-on-https", "weight": 1, "group": "best-practices-trust-safety" },
                    { "id": "errors-in-console", "weight": 1, "group": "best-practices-general" },
                    { "id": "doctype", "weight": 1, "group": "best-practices-general" },
                    { "id": "image-aspect-ratio", "weight": 1, "group": "best-practices-general" },
                ],
            },
            "pwa": {
                "title": "PWA",
                "description": "These checks validate the aspects of a Progressive Web App.",
                "manualDescription": "These checks are required by the baseline PWA Checklist but are not automatically checked.",
                "auditRefs": [
                    { "id": "installable-manifest", "weight": 2, "group": "pwa-installable" },
                    { "id": "service-worker", "weight": 1, "group": "pwa-optimized" },
                    { "id": "redirects-http", "weight": 2, "group": "pwa-optimized" },
                    { "id": "viewport", "weight": 2, "group": "pwa-optimized" },
                    { "id": "apple-touch-icon", "weight": 1, "group": "pwa-optimized" },
                    { "id": "pwa-cross-browser", "weight": 0 },
                ],
            },
        },
    })
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
