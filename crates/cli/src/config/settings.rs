// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run settings and their merge order: defaults, then config, then flags.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ConfigError;
use super::defaults;
use super::extend::merge_fragment;

/// Setting keys accepted from flags; anything else is dropped.
pub const SETTING_KEYS: &[&str] = &[
    "output",
    "maxWaitForLoad",
    "throttlingMethod",
    "formFactor",
    "disableStorageReset",
    "emulatedUserAgent",
    "onlyCategories",
    "onlyAudits",
    "skipAudits",
    "budgets",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThrottlingMethod {
    #[default]
    Simulate,
    Devtools,
    Provided,
}

impl ThrottlingMethod {
    /// Config spelling, shared by serde and the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ThrottlingMethod::Simulate => "simulate",
            ThrottlingMethod::Devtools => "devtools",
            ThrottlingMethod::Provided => "provided",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    #[default]
    Mobile,
    Desktop,
}

impl FormFactor {
    pub fn as_str(self) -> &'static str {
        match self {
            FormFactor::Mobile => "mobile",
            FormFactor::Desktop => "desktop",
        }
    }
}

/// User agent to emulate.
///
/// Written as `true` (the default agent), `false` (no emulation) or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserAgentSetting", into = "UserAgentSetting")]
pub enum EmulatedUserAgent {
    Disabled,
    Agent(String),
}

impl Default for EmulatedUserAgent {
    fn default() -> Self {
        EmulatedUserAgent::Agent(defaults::settings::MOBILE_USER_AGENT.to_string())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum UserAgentSetting {
    Flag(bool),
    Agent(String),
}

impl From<UserAgentSetting> for EmulatedUserAgent {
    fn from(setting: UserAgentSetting) -> Self {
        match setting {
            UserAgentSetting::Flag(true) => EmulatedUserAgent::default(),
            UserAgentSetting::Flag(false) => EmulatedUserAgent::Disabled,
            UserAgentSetting::Agent(agent) => EmulatedUserAgent::Agent(agent),
        }
    }
}

impl From<EmulatedUserAgent> for UserAgentSetting {
    fn from(agent: EmulatedUserAgent) -> Self {
        match agent {
            EmulatedUserAgent::Disabled => UserAgentSetting::Flag(false),
            EmulatedUserAgent::Agent(agent) => UserAgentSetting::Agent(agent),
        }
    }
}

/// Resource kinds a budget can limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Document,
    Font,
    Image,
    Media,
    Other,
    Script,
    Stylesheet,
    ThirdParty,
    Total,
}

/// A limit on one resource kind: a request count, or a size in KiB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceBudget {
    pub resource_type: ResourceType,
    pub budget: u64,
}

/// Performance budget for the pages under `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_counts: Vec<ResourceBudget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_sizes: Vec<ResourceBudget>,
}

impl Budget {
    /// Parse a `budgets` setting; `null` means no budgets.
    pub fn parse_list(value: Value) -> Result<Option<Vec<Budget>>, ConfigError> {
        let entries = match value {
            Value::Null => return Ok(None),
            Value::Array(entries) if entries.iter().all(Value::is_object) => entries,
            _ => {
                return Err(ConfigError::InvalidBudget(
                    "Budget file is not defined as an array of budgets".to_string(),
                ));
            }
        };
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value(entry)
                    .map_err(|err| ConfigError::InvalidBudget(format!("budget {index}: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "Settings::default_output")]
    pub output: Vec<String>,

    #[serde(default = "Settings::default_max_wait_for_load")]
    pub max_wait_for_load: u64,

    #[serde(default)]
    pub throttling_method: ThrottlingMethod,

    #[serde(default)]
    pub form_factor: FormFactor,

    #[serde(default)]
    pub disable_storage_reset: bool,

    #[serde(default)]
    pub emulated_user_agent: EmulatedUserAgent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_audits: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_audits: Option<Vec<String>>,

    /// Parsed separately by [`Budget::parse_list`].
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub budgets: Option<Vec<Budget>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: Self::default_output(),
            max_wait_for_load: Self::default_max_wait_for_load(),
            throttling_method: ThrottlingMethod::default(),
            form_factor: FormFactor::default(),
            disable_storage_reset: false,
            emulated_user_agent: EmulatedUserAgent::default(),
            only_categories: None,
            only_audits: None,
            skip_audits: None,
            budgets: None,
        }
    }
}

impl Settings {
    fn default_output() -> Vec<String> {
        defaults::settings::OUTPUT.iter().map(|s| s.to_string()).collect()
    }

    fn default_max_wait_for_load() -> u64 {
        defaults::settings::MAX_WAIT_FOR_LOAD
    }

    /// Whether any of the audit/category filters is set.
    pub fn has_filters(&self) -> bool {
        self.only_categories.is_some() || self.only_audits.is_some() || self.skip_audits.is_some()
    }
}

/// Drop flag keys that are not settings.
pub fn clean_flags(flags: &Map<String, Value>) -> Map<String, Value> {
    flags
        .iter()
        .filter(|(key, _)| SETTING_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Merge defaults, config settings and flags, later sources winning.
///
/// Arrays are replaced rather than concatenated.
pub fn resolve(
    config: Option<&Map<String, Value>>,
    flags: &Map<String, Value>,
) -> Result<Settings, ConfigError> {
    let mut merged = serde_json::to_value(Settings::default()).map_err(ConfigError::Settings)?;
    if let Some(config) = config {
        merged = merge_fragment(merged, Value::Object(config.clone()), true);
    }
    merged = merge_fragment(merged, Value::Object(clean_flags(flags)), true);
    let budgets = match &mut merged {
        Value::Object(map) => map.remove("budgets"),
        _ => None,
    };
    let mut settings: Settings = serde_json::from_value(merged).map_err(ConfigError::Settings)?;
    settings.budgets = match budgets {
        Some(budgets) => Budget::parse_list(budgets)?,
        None => None,
    };
    Ok(settings)
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
