// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config command implementation.

use std::process::ExitCode;

use anyhow::Context;

use smokehouse::cli::ConfigArgs;
use smokehouse::config;
use smokehouse::load;

/// Run the config command.
pub fn run(args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let config_json = args.config.as_deref().map(load::load_json).transpose()?;

    let resolved = config::resolve(config_json.as_ref(), &args.flags()).with_context(|| {
        match &args.config {
            Some(path) => format!("invalid config {}", path.display()),
            None => "invalid default config".to_string(),
        }
    })?;

    println!("{}", resolved.print_string());
    Ok(ExitCode::SUCCESS)
}
