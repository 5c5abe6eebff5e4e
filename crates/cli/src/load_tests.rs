// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::assert::get_assertion_report;
use crate::test_utils::{sample_run, temp_file_with_content};

#[test]
fn loads_yaml_expectations() {
    let file = temp_file_with_content(
        r#"
lhr:
  finalUrl: http://localhost:10200/dobetterweb/dbw_tester.html
  audits:
    errors-in-console:
      details:
        items:
          _includes:
            - description: { _regex: "A distinctive error" }
          length: ">=5"
"#,
        ".yaml",
    );
    // `length` beside `_includes` is rejected.
    assert!(matches!(
        load_expectations(file.path()),
        Err(LoadError::Pattern(PatternError::MixedSetKeys { .. }))
    ));

    let file = temp_file_with_content(
        r#"
lhr:
  finalUrl: http://localhost:10200/dobetterweb/dbw_tester.html
  timing:
    total: ">1000"
  audits:
    errors-in-console:
      details:
        items:
          _includes:
            - description: { _regex: "A distinctive error" }
"#,
        ".yml",
    );
    let expectations = load_expectations(file.path()).unwrap();
    let report = get_assertion_report(&sample_run(), &expectations);
    assert_eq!((report.passed, report.failed), (3, 0));
}

#[test]
fn loads_json_expectations() {
    let file = temp_file_with_content(r#"{"lhr": {"audits": {"is-on-https": {"score": 0}}}}"#, ".json");
    let expectations = load_expectations(file.path()).unwrap();
    assert!(get_assertion_report(&sample_run(), &expectations).is_success());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_json(Path::new("/nonexistent/lhr.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/lhr.json"));
}

#[test]
fn malformed_json_names_the_file() {
    let file = temp_file_with_content("{ not json", ".json");
    let err = load_json(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let file = temp_file_with_content("lhr: [unclosed", ".yaml");
    assert!(matches!(
        load_document(file.path()),
        Err(LoadError::Yaml { .. })
    ));
}
