//! Behavioral specs for `smokehouse assert`.

use crate::prelude::*;

// =============================================================================
// EXIT CODES
// =============================================================================

/// > Exit code 0 when every comparison passes
#[test]
fn passing_expectations_exit_zero() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/passing.json"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PASS"))
        .stdout(predicates::str::contains("0 failed"))
        .stdout(predicates::str::contains("difference").not());
}

/// > YAML expectations are accepted by extension
#[test]
fn yaml_expectations_are_accepted() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/passing.yaml"))
        .assert()
        .success();
}

/// > Exit code 1 when any comparison fails
#[test]
fn failing_expectations_exit_one() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/failing.json"))
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("FAIL"))
        .stdout(predicates::str::contains("2 failed"))
        .stdout(predicates::str::contains(
            "✘ difference at lhr.audits.is-on-https.score",
        ))
        .stdout(predicates::str::contains("    expected: 1\n       found: 0"));
}

/// > Exit code 2 when the expectations cannot be loaded
#[test]
fn invalid_pattern_exits_two() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/invalid-pattern.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("error:"))
        .stderr(predicates::str::contains("_unknown"));
}

/// > Exit code 2 when the result file is missing
#[test]
fn missing_result_file_exits_two() {
    smokehouse_cmd()
        .args(["assert", "does-not-exist.json"])
        .arg(fixture("assert/passing.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

/// > A config file is not an assert option
#[test]
fn config_flag_is_a_usage_error() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/passing.json"))
        .args(["-C", "custom.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("-C"));
}

/// > SMOKEHOUSE_CONFIG does not affect assert
#[test]
fn config_environment_is_ignored_by_assert() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/passing.json"))
        .env("SMOKEHOUSE_CONFIG", "does-not-exist.json")
        .assert()
        .success();
}

/// > Exit code 2 when the result file is not JSON
#[test]
fn malformed_result_exits_two() {
    let lhr = temp_file("{ not json", ".json");
    smokehouse_cmd()
        .arg("assert")
        .arg(lhr.path())
        .arg(fixture("assert/passing.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid JSON"));
}

// =============================================================================
// OUTPUT
// =============================================================================

/// > JSON output carries the full report
#[test]
fn json_output_is_the_report() {
    let output = smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/failing.json"))
        .args(["-o", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report = stdout_json(&output);
    assert_eq!(report["failed"], 2);
    assert_eq!(report["differences"].as_array().unwrap().len(), 2);
    assert_eq!(
        report["differences"][0]["path"],
        "lhr.lighthouseVersion"
    );
    assert!(report["log"].as_str().unwrap().contains("difference at"));
}

/// > --color=always emits escape sequences; --no-color wins over it
#[test]
fn color_flags_control_escapes() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/failing.json"))
        .args(["--color", "always"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\u{1b}["));

    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/failing.json"))
        .args(["--color", "always", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\u{1b}[").not());
}

/// > Colored actual values are logged without their escapes
#[test]
fn escapes_in_actual_values_are_stripped() {
    let expectations = temp_file(
        r#"{ "lhr": { "audits": { "errors-in-console": { "details": { "items": {
            "_excludes": [{ "description": { "_regex": "colored logger" } }]
        } } } } } }"#,
        ".json",
    );
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(expectations.path())
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Red error from a colored logger"))
        .stdout(predicates::str::contains("\u{1b}[").not());
}

// =============================================================================
// ARTIFACTS
// =============================================================================

/// > Artifact expectations are checked against --artifacts
#[test]
fn artifacts_are_checked_when_given() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/with-artifacts.json"))
        .arg("--artifacts")
        .arg(fixture("assert/artifacts.json"))
        .assert()
        .success();
}

/// > Without --artifacts, artifact expectations see an empty object
#[test]
fn missing_artifacts_fail_artifact_expectations() {
    smokehouse_cmd()
        .arg("assert")
        .arg(sample_lhr())
        .arg(fixture("assert/with-artifacts.json"))
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("difference at artifacts.URL"));
}
