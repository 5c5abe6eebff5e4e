// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Narrowing a config to `onlyCategories` / `onlyAudits` / `skipAudits`.

use std::collections::{BTreeMap, HashSet};

use super::ConfigError;
use super::audits::AuditDefn;
use super::catalog;
use super::defaults::artifacts::TRACES;
use super::defaults::audits::FULL_PAGE_SCREENSHOT;
use super::passes::Pass;
use super::settings::Settings;
use super::validate::Category;

/// The parts of a config that filtering rewrites.
pub(super) struct Filterable<'a> {
    pub audits: &'a mut Vec<AuditDefn>,
    pub categories: &'a mut BTreeMap<String, Category>,
    pub passes: &'a mut Vec<Pass>,
}

/// Apply the settings' filters, returning warnings.
pub(super) fn apply(settings: &Settings, config: Filterable<'_>) -> Result<Vec<String>, ConfigError> {
    let only_categories = settings.only_categories.as_deref();
    let only_audits = settings.only_audits.as_deref();
    let skip_audits = settings.skip_audits.as_deref().unwrap_or_default();

    if let Some(conflict) = only_audits
        .unwrap_or_default()
        .iter()
        .find(|id| skip_audits.contains(id))
    {
        return Err(ConfigError::ConflictingAuditFilters(conflict.clone()));
    }

    let mut warnings = filter_warnings(
        only_categories,
        only_audits,
        skip_audits,
        config.audits,
        config.categories,
    );

    let selected = filter_categories(
        config.categories,
        only_categories,
        only_audits,
        skip_audits,
    );

    let keep: HashSet<String> = if only_categories.is_none() && only_audits.is_none() {
        config.audits.iter().map(|audit| audit.id.clone()).collect()
    } else {
        let mut keep = selected;
        keep.extend(only_audits.unwrap_or_default().iter().cloned());
        if only_categories.is_some() {
            keep.insert(FULL_PAGE_SCREENSHOT.to_string());
        }
        keep
    };
    config
        .audits
        .retain(|audit| keep.contains(&audit.id) && !skip_audits.contains(&audit.id));

    warnings.extend(filter_passes(config.passes, config.audits));
    Ok(warnings)
}

fn filter_warnings(
    only_categories: Option<&[String]>,
    only_audits: Option<&[String]>,
    skip_audits: &[String],
    audits: &[AuditDefn],
    categories: &BTreeMap<String, Category>,
) -> Vec<String> {
    let mut warnings = Vec::new();
    for id in only_categories.unwrap_or_default() {
        if !categories.contains_key(id) {
            warnings.push(format!("unrecognized category in 'onlyCategories': {id}"));
        }
    }

    let known = |id: &String| audits.iter().any(|audit| &audit.id == id);
    for id in only_audits.unwrap_or_default() {
        if !known(id) {
            warnings.push(format!("unrecognized audit in 'onlyAudits': {id}"));
        }
    }
    for id in skip_audits {
        if !known(id) {
            warnings.push(format!("unrecognized audit in 'skipAudits': {id}"));
        }
    }

    for id in only_audits.unwrap_or_default() {
        let parent = only_categories.unwrap_or_default().iter().find(|category| {
            categories
                .get(*category)
                .is_some_and(|c| c.audit_refs.iter().any(|r| &r.id == id))
        });
        if let Some(parent) = parent {
            warnings.push(format!(
                "{id} in 'onlyAudits' is already included by {parent} category"
            ));
        }
    }
    warnings
}

/// Drop unselected refs and emptied categories; returns the referenced audits.
fn filter_categories(
    categories: &mut BTreeMap<String, Category>,
    only_categories: Option<&[String]>,
    only_audits: Option<&[String]>,
    skip_audits: &[String],
) -> HashSet<String> {
    let in_audits = |id: &String| only_audits.is_some_and(|only| only.contains(id));

    for (category_id, category) in categories.iter_mut() {
        let chosen = only_categories.map(|only| only.contains(category_id));
        match (chosen, only_audits.is_some()) {
            (Some(true), _) | (None, false) => {}
            (Some(false), true) | (None, true) => {
                category.audit_refs.retain(|r| in_audits(&r.id));
            }
            (Some(false), false) => category.audit_refs.clear(),
        }
        category.audit_refs.retain(|r| !skip_audits.contains(&r.id));
    }
    categories.retain(|_, category| !category.audit_refs.is_empty());

    categories
        .values()
        .flat_map(|category| category.audit_refs.iter().map(|r| r.id.clone()))
        .collect()
}

/// Keep only gatherers the remaining audits use; drop idle passes and traces.
fn filter_passes(passes: &mut Vec<Pass>, audits: &[AuditDefn]) -> Vec<String> {
    let needed: HashSet<&str> = audits.iter().flat_map(AuditDefn::used_artifacts).collect();
    let needs_trace = needed.contains(TRACES);

    let mut warnings = Vec::new();
    for pass in passes.iter_mut() {
        pass.gatherers
            .retain(|gatherer| needed.contains(catalog::artifact_name(gatherer).as_str()));
        if pass.record_trace && !needs_trace {
            warnings.push(format!(
                "Trace not requested by an audit, dropping trace in {}",
                pass.pass_name
            ));
            pass.record_trace = false;
        }
    }
    passes.retain(|pass| pass.record_trace || pass.is_default_pass() || !pass.gatherers.is_empty());
    warnings
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
