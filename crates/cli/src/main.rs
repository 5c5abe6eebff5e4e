// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_assert;
mod cmd_config;

use std::process::ExitCode;

use clap::Parser;

use smokehouse::cli::{Cli, Command};
use smokehouse::logging;

/// Exit code for load, parse and config errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Command::Assert(args) => cmd_assert::run(args),
        Command::Config(args) => cmd_config::run(args),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
