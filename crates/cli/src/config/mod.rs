// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit pipeline configuration.
//!
//! [`resolve`] turns a config JSON plus command-line flags into a
//! [`ResolvedConfig`]:
//! 1. optional extension of the built-in default config
//! 2. settings merge (defaults, config, flags)
//! 3. pass and audit expansion
//! 4. category validation
//! 5. filtering by `onlyCategories` / `onlyAudits` / `skipAudits`
//! 6. artifact validation
//!
//! Audits and gatherers are declarative records; nothing is loaded or run.

mod audits;
mod catalog;
pub mod defaults;
mod extend;
mod filter;
mod passes;
mod print;
mod settings;
mod validate;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use audits::{AuditDefn, AuditMeta, ScoreDisplayMode, audit_id};
pub use catalog::{GATHERERS, artifact_name, default_config_json};
pub use extend::{extend_config_json, merge_fragment};
pub use passes::{LoadFailureMode, Pass};
pub use settings::{
    Budget, EmulatedUserAgent, FormFactor, ResourceBudget, ResourceType, SETTING_KEYS, Settings,
    ThrottlingMethod,
};
pub use validate::{AuditRef, Category, Group};

use audits::AuditJson;
use defaults::EXTENDS_DEFAULT;
use defaults::pass::DEFAULT_PASS_NAME;
use passes::PassJson;
use validate::CategoryJson;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`lighthouse:default` is the only valid extension method.")]
    InvalidExtends,

    #[error("config must be a JSON object")]
    NotAnObject,

    #[error("invalid config: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Settings(#[source] serde_json::Error),

    #[error("{0}")]
    InvalidBudget(String),

    #[error("Unable to locate audit: {0}")]
    AuditNotFound(String),

    #[error("{id} has {reason}")]
    InvalidAudit { id: String, reason: &'static str },

    #[error("Unable to locate gatherer: {0}")]
    GathererNotFound(String),

    #[error("pass names must be unique; `{0}` is used more than once")]
    DuplicatePassName(String),

    #[error("missing an audit id at {category}[{index}]")]
    MissingAuditId { category: String, index: usize },

    #[error("could not find {audit} audit for category {category}")]
    UnknownAudit { audit: String, category: String },

    #[error("{audit} references unknown group {group}")]
    UnknownGroup { audit: String, group: String },

    #[error("{0} is manual but has a positive weight")]
    ManualAuditWeight(String),

    #[error("{0} accessibility audit does not have a group")]
    A11yAuditWithoutGroup(String),

    #[error("{artifact} gatherer, required by audit {audit}, was not found in config")]
    MissingArtifact { artifact: String, audit: String },

    #[error("{0} appears in both 'onlyAudits' and 'skipAudits'")]
    ConflictingAuditFilters(String),
}

/// Config JSON after extension. Unrecognized keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigJson {
    #[serde(default)]
    settings: Option<Map<String, Value>>,
    #[serde(default)]
    passes: Option<Vec<PassJson>>,
    #[serde(default)]
    audits: Option<Vec<AuditJson>>,
    #[serde(default)]
    categories: Option<BTreeMap<String, CategoryJson>>,
    #[serde(default)]
    groups: Option<BTreeMap<String, Group>>,
}

/// A fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub settings: Settings,
    pub passes: Vec<Pass>,
    pub audits: Vec<AuditDefn>,
    pub categories: BTreeMap<String, Category>,
    pub groups: BTreeMap<String, Group>,
    /// Non-fatal problems found while resolving.
    pub warnings: Vec<String>,
}

impl ResolvedConfig {
    /// Canonical config JSON; resolving it yields an equal config.
    pub fn print_string(&self) -> String {
        print::print_string(self)
    }

    pub fn audit(&self, id: &str) -> Option<&AuditDefn> {
        self.audits.iter().find(|audit| audit.id == id)
    }
}

fn push_warning(warnings: &mut Vec<String>, message: String) {
    tracing::warn!("{message}");
    warnings.push(message);
}

/// Resolve a config; `None` means the built-in default config.
pub fn resolve(
    config_json: Option<&Value>,
    flags: &Map<String, Value>,
) -> Result<ResolvedConfig, ConfigError> {
    let mut user = match config_json {
        None => default_config_json(),
        Some(Value::Object(map)) => Value::Object(map.clone()),
        Some(_) => return Err(ConfigError::NotAnObject),
    };

    let extends = user
        .as_object_mut()
        .and_then(|map| map.get_mut("extends"))
        .map(std::mem::take);
    let extending = match extends {
        None | Some(Value::Null) => false,
        Some(Value::String(name)) if name == EXTENDS_DEFAULT => true,
        Some(_) => return Err(ConfigError::InvalidExtends),
    };
    if let Some(map) = user.as_object_mut() {
        map.remove("extends");
    }

    name_unnamed_passes(&mut user);
    if extending {
        tracing::debug!("extending the default config");
        user = extend_config_json(default_config_json(), user);
    }

    let json: ConfigJson = serde_json::from_value(user)?;
    let mut warnings = Vec::new();

    let settings = settings::resolve(json.settings.as_ref(), flags)?;
    let mut passes = passes::resolve(json.passes.unwrap_or_default())?;
    let mut audits = audits::expand(json.audits.unwrap_or_default())?;
    let groups = json.groups.unwrap_or_default();
    let mut categories =
        validate::resolve_categories(json.categories.unwrap_or_default(), &audits, &groups)?;
    tracing::debug!(
        passes = passes.len(),
        audits = audits.len(),
        categories = categories.len(),
        "expanded config"
    );

    if settings.throttling_method == ThrottlingMethod::Devtools {
        passes::apply_devtools_thresholds(&mut passes);
    }

    if settings.has_filters() {
        let filtered = filter::apply(
            &settings,
            filter::Filterable {
                audits: &mut audits,
                categories: &mut categories,
                passes: &mut passes,
            },
        )?;
        for warning in filtered {
            push_warning(&mut warnings, warning);
        }
        tracing::debug!(audits = audits.len(), passes = passes.len(), "filtered config");
    }

    if let Some(warning) = passes::enforce_fatal_first_pass(&mut passes) {
        push_warning(&mut warnings, warning);
    }

    if !passes.is_empty() {
        validate::validate_artifacts(&audits, &passes)?;
    }

    Ok(ResolvedConfig {
        settings,
        passes,
        audits,
        categories,
        groups,
        warnings,
    })
}

/// Give passes without a `passName` the default name.
fn name_unnamed_passes(config: &mut Value) {
    let Some(passes) = config.get_mut("passes").and_then(Value::as_array_mut) else {
        return;
    };
    for pass in passes.iter_mut().filter_map(Value::as_object_mut) {
        let unnamed = pass.get("passName").is_none_or(Value::is_null);
        if unnamed {
            pass.insert(
                "passName".to_string(),
                Value::String(DEFAULT_PASS_NAME.to_string()),
            );
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
