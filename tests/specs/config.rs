//! Behavioral specs for `smokehouse config`.

use crate::prelude::*;

fn resolved(cmd: &mut std::process::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout_json(&output)
}

fn audit_paths(config: &serde_json::Value) -> Vec<&str> {
    config["audits"]
        .as_array()
        .unwrap()
        .iter()
        .map(|audit| audit["path"].as_str().unwrap())
        .collect()
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// > Without a config file the default config is printed
#[test]
fn default_config_is_printed() {
    let config = resolved(smokehouse_cmd().arg("config"));
    assert_eq!(config["passes"][0]["passName"], "defaultPass");
    assert_eq!(config["passes"][1]["passName"], "offlinePass");
    assert_eq!(config["settings"]["throttlingMethod"], "simulate");
    assert!(config["categories"]["performance"].is_object());
}

/// > --config extends and filters by its settings
#[test]
fn config_file_settings_filter_the_config() {
    let config = resolved(
        smokehouse_cmd()
            .arg("config")
            .arg("-C")
            .arg(fixture("config/only-performance.json")),
    );
    let categories: Vec<&String> = config["categories"].as_object().unwrap().keys().collect();
    assert_eq!(categories, vec!["performance"]);
    assert!(audit_paths(&config).contains(&"full-page-screenshot"));
    assert_eq!(config["passes"].as_array().unwrap().len(), 1);
}

/// > SMOKEHOUSE_CONFIG names the config file
#[test]
fn config_path_from_environment() {
    let config = resolved(
        smokehouse_cmd()
            .arg("config")
            .env("SMOKEHOUSE_CONFIG", fixture("config/custom-audit.json")),
    );
    assert_eq!(audit_paths(&config), vec!["custom/robots-check"]);
    assert_eq!(config["audits"][0]["options"]["strict"], true);
    assert_eq!(
        config["audits"][0]["meta"]["requiredArtifacts"],
        serde_json::json!(["RobotsTxt"])
    );
}

/// > Filter flags override config settings
#[test]
fn filter_flags_apply() {
    let config = resolved(smokehouse_cmd().args([
        "config",
        "--only-audits",
        "first-contentful-paint,speed-index",
        "--throttling-method",
        "devtools",
    ]));
    assert_eq!(
        audit_paths(&config),
        vec!["metrics/first-contentful-paint", "metrics/speed-index"]
    );
    assert_eq!(config["settings"]["onlyAudits"].as_array().unwrap().len(), 2);
    assert_eq!(config["passes"][0]["cpuQuietThresholdMs"], 5000);
}

/// > The printed config resolves to itself
#[test]
fn printed_config_is_stable() {
    let first = smokehouse_cmd()
        .args(["config", "--only-categories", "accessibility"])
        .output()
        .unwrap();
    assert!(first.status.success());

    let printed = temp_file(&String::from_utf8_lossy(&first.stdout), ".json");
    let second = smokehouse_cmd()
        .arg("config")
        .arg("-C")
        .arg(printed.path())
        .output()
        .unwrap();
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// =============================================================================
// WARNINGS AND ERRORS
// =============================================================================

/// > Warnings go to stderr and do not fail the command
#[test]
fn warnings_are_logged_to_stderr() {
    smokehouse_cmd()
        .arg("config")
        .arg("-C")
        .arg(fixture("config/non-fatal-first-pass.json"))
        .assert()
        .success()
        .stderr(predicates::str::contains(
            "is the first pass but was marked as non-fatal",
        ));
}

/// > Unknown filter ids are warnings
#[test]
fn unknown_filter_ids_warn() {
    smokehouse_cmd()
        .args(["config", "--only-categories", "not-a-category"])
        .assert()
        .success()
        .stderr(predicates::str::contains(
            "unrecognized category in 'onlyCategories': not-a-category",
        ));
}

/// > Unknown audits exit 2
#[test]
fn unknown_audit_exits_two() {
    smokehouse_cmd()
        .arg("config")
        .arg("-C")
        .arg(fixture("config/unknown-audit.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Unable to locate audit: custom/not-installed"));
}

/// > Only the default config can be extended
#[test]
fn bad_extends_exits_two() {
    smokehouse_cmd()
        .arg("config")
        .arg("-C")
        .arg(fixture("config/bad-extends.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains(
            "`lighthouse:default` is the only valid extension method.",
        ));
}

/// > Conflicting filter flags exit 2
#[test]
fn conflicting_filters_exit_two() {
    smokehouse_cmd()
        .args([
            "config",
            "--only-audits",
            "viewport",
            "--skip-audits",
            "viewport",
        ])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("viewport appears in both"));
}
