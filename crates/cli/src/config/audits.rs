// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit entries: `"path"` or `{path, options, meta}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ConfigError;
use super::catalog;

/// How an audit's score is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDisplayMode {
    #[default]
    Numeric,
    Binary,
    Manual,
    Informative,
}

/// Describes an audit and the artifacts it needs.
///
/// Built-in audits only carry an id, artifacts and a display mode. Inline
/// definitions also carry a title and description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required_artifacts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optional_artifacts: Vec<String>,
    pub score_display_mode: ScoreDisplayMode,
}

/// Audit meta as written inline, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AuditMetaJson {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    failure_title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    required_artifacts: Option<Vec<String>>,
    #[serde(default)]
    optional_artifacts: Vec<String>,
    #[serde(default)]
    score_display_mode: ScoreDisplayMode,
}

impl AuditMetaJson {
    /// Check the fields every inline audit must define.
    ///
    /// `audit` names the audit in errors since `meta.id` may be the
    /// missing piece.
    fn validate(self, audit: &str) -> Result<AuditMeta, ConfigError> {
        let invalid = |reason: &'static str| ConfigError::InvalidAudit {
            id: audit.to_string(),
            reason,
        };
        let id = self.id.ok_or_else(|| invalid("no meta.id property"))?;
        let title = self.title.ok_or_else(|| invalid("no meta.title property"))?;
        let description = self
            .description
            .ok_or_else(|| invalid("no meta.description property"))?;
        if description.is_empty() {
            return Err(invalid("empty meta.description string"));
        }
        let required_artifacts = self
            .required_artifacts
            .ok_or_else(|| invalid("no meta.requiredArtifacts property"))?;
        if self.score_display_mode == ScoreDisplayMode::Binary && self.failure_title.is_none() {
            return Err(invalid("no meta.failureTitle and should"));
        }
        Ok(AuditMeta {
            id: Some(id),
            title: Some(title),
            failure_title: self.failure_title,
            description: Some(description),
            required_artifacts,
            optional_artifacts: self.optional_artifacts,
            score_display_mode: self.score_display_mode,
        })
    }
}

/// An audit as written in a config.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum AuditJson {
    Path(String),
    Defn {
        path: String,
        #[serde(default)]
        options: Map<String, Value>,
        #[serde(default)]
        meta: Option<AuditMetaJson>,
    },
}

/// A resolved audit.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditDefn {
    pub path: String,
    pub id: String,
    pub options: Map<String, Value>,
    pub meta: AuditMeta,
    /// Whether `meta` came from the built-in catalog.
    pub builtin: bool,
}

impl AuditDefn {
    pub fn is_manual(&self) -> bool {
        self.meta.score_display_mode == ScoreDisplayMode::Manual
    }

    /// Required and optional artifacts.
    pub fn used_artifacts(&self) -> impl Iterator<Item = &str> {
        self.meta
            .required_artifacts
            .iter()
            .chain(&self.meta.optional_artifacts)
            .map(String::as_str)
    }
}

/// Audit id of a path: its last `/` segment.
pub fn audit_id(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Resolve audit entries, merging repeats of the same id.
///
/// The first occurrence fixes the position and path; later options win key
/// by key.
pub(super) fn expand(entries: Vec<AuditJson>) -> Result<Vec<AuditDefn>, ConfigError> {
    let mut audits: Vec<AuditDefn> = Vec::new();
    for entry in entries {
        let (path, options, meta) = match entry {
            AuditJson::Path(path) => (path, Map::new(), None),
            AuditJson::Defn {
                path,
                options,
                meta,
            } => (path, options, meta),
        };
        let id = audit_id(&path).to_string();
        let meta = meta.map(|meta| meta.validate(&id)).transpose()?;

        if let Some(existing) = audits.iter_mut().find(|audit| audit.id == id) {
            existing.options.extend(options);
            if let Some(meta) = meta {
                existing.meta = meta;
                existing.builtin = false;
            }
            continue;
        }

        let (meta, builtin) = match meta {
            Some(meta) => (meta, false),
            None => match catalog::builtin_audit(&id) {
                Some(meta) => (meta, true),
                None => return Err(ConfigError::AuditNotFound(path)),
            },
        };
        audits.push(AuditDefn {
            path,
            id,
            options,
            meta,
            builtin,
        });
    }
    Ok(audits)
}

#[cfg(test)]
#[path = "audits_tests.rs"]
mod tests;
