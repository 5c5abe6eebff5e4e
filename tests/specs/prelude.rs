//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::PathBuf;
use std::process::Command;

/// Returns a Command configured to run the smokehouse binary
pub fn smokehouse_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("smokehouse"));
    cmd.env_remove("SMOKEHOUSE_CONFIG").env_remove("SMOKEHOUSE_LOG");
    cmd
}

/// Get path to a test fixture file or directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The sample result document shared by assert specs
pub fn sample_lhr() -> PathBuf {
    fixture("assert/sample-lhr.json")
}

/// A temporary file holding `content`, kept alive by the returned handle
pub fn temp_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    std::io::Write::write_all(&mut file, content.as_bytes()).unwrap();
    file
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
