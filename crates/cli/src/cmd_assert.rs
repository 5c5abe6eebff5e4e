// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assert command implementation.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use termcolor::{StandardStream, WriteColor};

use smokehouse::assert::{AssertionReport, RunnerResult, get_assertion_report, log};
use smokehouse::cli::{AssertArgs, OutputFormat};
use smokehouse::color::{resolve_color, scheme};
use smokehouse::load;

/// Exit code when any comparison failed.
const EXIT_FAILED: u8 = 1;

/// Run the assert command.
pub fn run(args: &AssertArgs) -> anyhow::Result<ExitCode> {
    let lhr = load::load_json(&args.lhr)?;
    let expectations = load::load_expectations(&args.expectations)?;

    let mut result = RunnerResult::new(lhr);
    if let Some(path) = &args.artifacts {
        result = result.with_artifacts(load::load_json(path)?);
    }

    let report = get_assertion_report(&result, &expectations);
    match args.output {
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(resolve_color(args.color, args.no_color));
            write_text(&mut stdout, &report)?;
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &report)
                .context("failed to write report")?;
            writeln!(handle)?;
        }
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILED)
    })
}

/// Difference blocks followed by a one-line summary.
fn write_text<W: WriteColor>(out: &mut W, report: &AssertionReport) -> io::Result<()> {
    if !report.differences.is_empty() {
        log::write_differences(out, &report.differences)?;
        writeln!(out)?;
        writeln!(out)?;
    }

    let (spec, verdict) = if report.is_success() {
        (scheme::pass(), "PASS")
    } else {
        (scheme::fail(), "FAIL")
    };
    out.set_color(&spec)?;
    write!(out, "{verdict}")?;
    out.reset()?;
    out.set_color(&scheme::summary())?;
    write!(out, " {} passed, {} failed", report.passed, report.failed)?;
    out.reset()?;
    writeln!(out)
}
