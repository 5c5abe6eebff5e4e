// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical config JSON for a resolved config.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::ResolvedConfig;
use super::audits::AuditMeta;
use super::passes::Pass;
use super::settings::Settings;
use super::validate::{Category, Group};

#[derive(Serialize)]
struct PrintedAudit<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    options: &'a Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<&'a AuditMeta>,
}

#[derive(Serialize)]
struct PrintedConfig<'a> {
    settings: &'a Settings,
    passes: &'a [Pass],
    audits: Vec<PrintedAudit<'a>>,
    categories: &'a BTreeMap<String, Category>,
    groups: &'a BTreeMap<String, Group>,
}

/// Pretty JSON that resolves back to an equal config.
pub(super) fn print_string(config: &ResolvedConfig) -> String {
    let printed = PrintedConfig {
        settings: &config.settings,
        passes: &config.passes,
        audits: config
            .audits
            .iter()
            .map(|audit| PrintedAudit {
                path: &audit.path,
                options: &audit.options,
                meta: (!audit.builtin).then_some(&audit.meta),
            })
            .collect(),
        categories: &config.categories,
        groups: &config.groups,
    };
    // Every field serializes to JSON with string keys.
    serde_json::to_string_pretty(&printed).unwrap_or_default()
}
