// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use crate::color::ColorMode;
use crate::config::{FormFactor, ThrottlingMethod};

/// Smoke-test assertions and config resolution for audit pipeline results
#[derive(Parser)]
#[command(name = "smokehouse")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a run result against expectations
    Assert(AssertArgs),
    /// Resolve a config and print it
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct AssertArgs {
    /// Run result (LHR) JSON file
    #[arg(value_name = "LHR")]
    pub lhr: PathBuf,

    /// Expectations file (JSON or YAML)
    #[arg(value_name = "EXPECTATIONS")]
    pub expectations: PathBuf,

    /// Artifacts JSON file, checked against the `artifacts` expectations
    #[arg(long, value_name = "FILE")]
    pub artifacts: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SMOKEHOUSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only run audits in these categories
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub only_categories: Option<Vec<String>>,

    /// Only run these audits
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub only_audits: Option<Vec<String>>,

    /// Skip these audits
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub skip_audits: Option<Vec<String>>,

    /// Throttling method
    #[arg(long, value_name = "METHOD")]
    pub throttling_method: Option<ThrottlingMethod>,

    /// Form factor to emulate
    #[arg(long)]
    pub form_factor: Option<FormFactor>,
}

impl ConfigArgs {
    /// Settings flags in config-key form; unset flags are omitted.
    pub fn flags(&self) -> Map<String, Value> {
        let mut flags = Map::new();
        let lists = [
            ("onlyCategories", &self.only_categories),
            ("onlyAudits", &self.only_audits),
            ("skipAudits", &self.skip_audits),
        ];
        for (key, ids) in lists {
            if let Some(ids) = ids {
                flags.insert(key.to_string(), Value::from(ids.clone()));
            }
        }
        if let Some(method) = self.throttling_method {
            flags.insert("throttlingMethod".to_string(), method.as_str().into());
        }
        if let Some(form_factor) = self.form_factor {
            flags.insert("formFactor".to_string(), form_factor.as_str().into());
        }
        flags
    }
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
