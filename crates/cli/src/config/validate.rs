// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Categories, groups and artifact availability.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ConfigError;
use super::audits::AuditDefn;
use super::defaults::artifacts::{BASE, DEVTOOLS_LOGS, TRACES};
use super::defaults::audits::ACCESSIBILITY_CATEGORY;
use super::passes::Pass;

/// A named set of audit references shown together in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A weighted reference from a category to an audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRef {
    pub id: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A scored category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_description: Option<String>,
    pub audit_refs: Vec<AuditRef>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuditRefJson {
    id: Option<String>,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    group: Option<String>,
}

/// Anything that is not an object is kept so it can be reported by position.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AuditRefEntry {
    Ref(AuditRefJson),
    Malformed(Value),
}

/// A category as written in a config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CategoryJson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    manual_description: Option<String>,
    #[serde(default)]
    audit_refs: Vec<AuditRefEntry>,
}

/// Resolve categories against the configured audits and groups.
pub(super) fn resolve_categories(
    categories: BTreeMap<String, CategoryJson>,
    audits: &[AuditDefn],
    groups: &BTreeMap<String, Group>,
) -> Result<BTreeMap<String, Category>, ConfigError> {
    let mut resolved = BTreeMap::new();
    for (category_id, category) in categories {
        let mut audit_refs = Vec::with_capacity(category.audit_refs.len());
        for (index, entry) in category.audit_refs.into_iter().enumerate() {
            let audit_ref = match entry {
                AuditRefEntry::Ref(AuditRefJson {
                    id: Some(id),
                    weight,
                    group,
                }) => AuditRef { id, weight, group },
                _ => {
                    return Err(ConfigError::MissingAuditId {
                        category: category_id,
                        index,
                    });
                }
            };
            validate_ref(&category_id, &audit_ref, audits, groups)?;
            audit_refs.push(audit_ref);
        }
        resolved.insert(
            category_id,
            Category {
                title: category.title,
                description: category.description,
                manual_description: category.manual_description,
                audit_refs,
            },
        );
    }
    Ok(resolved)
}

fn validate_ref(
    category_id: &str,
    audit_ref: &AuditRef,
    audits: &[AuditDefn],
    groups: &BTreeMap<String, Group>,
) -> Result<(), ConfigError> {
    let Some(audit) = audits.iter().find(|audit| audit.id == audit_ref.id) else {
        return Err(ConfigError::UnknownAudit {
            audit: audit_ref.id.clone(),
            category: category_id.to_string(),
        });
    };
    let manual = audit.is_manual();
    if category_id == ACCESSIBILITY_CATEGORY && audit_ref.group.is_none() && !manual {
        return Err(ConfigError::A11yAuditWithoutGroup(audit_ref.id.clone()));
    }
    if manual && audit_ref.weight > 0.0 {
        return Err(ConfigError::ManualAuditWeight(audit_ref.id.clone()));
    }
    if let Some(group) = &audit_ref.group
        && !groups.contains_key(group)
    {
        return Err(ConfigError::UnknownGroup {
            audit: audit_ref.id.clone(),
            group: group.clone(),
        });
    }
    Ok(())
}

/// Artifacts the passes make available, base artifacts included.
pub(super) fn available_artifacts(passes: &[Pass]) -> HashSet<String> {
    let mut available: HashSet<String> = BASE.iter().map(|s| s.to_string()).collect();
    if !passes.is_empty() {
        available.insert(DEVTOOLS_LOGS.to_string());
    }
    if passes.iter().any(|pass| pass.record_trace) {
        available.insert(TRACES.to_string());
    }
    available.extend(passes.iter().flat_map(Pass::artifacts));
    available
}

/// Every required artifact must be produced by something.
pub(super) fn validate_artifacts(audits: &[AuditDefn], passes: &[Pass]) -> Result<(), ConfigError> {
    let available = available_artifacts(passes);
    for audit in audits {
        if let Some(missing) = audit
            .meta
            .required_artifacts
            .iter()
            .find(|artifact| !available.contains(*artifact))
        {
            return Err(ConfigError::MissingArtifact {
                artifact: missing.clone(),
                audit: audit.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
