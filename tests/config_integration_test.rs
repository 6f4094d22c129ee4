//! Configuration loading integration tests

use reidrisk::config::load_config;
use reidrisk::core::Generalization;
use std::io::Write;
use tempfile::NamedTempFile;

const FULL_CONFIG: &str = r#"
[application]
name = "reidrisk"
log_level = "debug"

[dataset]
path = "patients.json"
sensitive_attribute = "Diagnosis"

[comparison]
fail_fast = true

[logging]
local_enabled = false

[[scenario]]
name = "raw"

[[scenario.quasi_identifier]]
attribute = "Age"

[[scenario.quasi_identifier]]
attribute = "ZIP"

[[scenario.quasi_identifier]]
attribute = "Gender"

[scenario.thresholds]
k_min = 2
l_min = 2
t_max = 0.5

[[scenario]]
name = "generalized"

[[scenario.quasi_identifier]]
attribute = "Age"
generalization = { kind = "band", width = 10 }

[[scenario.quasi_identifier]]
attribute = "ZIP"
generalization = { kind = "prefix", length = 3, mask = "**" }

[scenario.thresholds]
k_min = 2
l_min = 2
t_max = 0.34
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(FULL_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.comparison.fail_fast);
    assert_eq!(config.scenarios.len(), 2);

    let specs = config.scenario_specs();
    assert_eq!(specs[0].quasi_identifiers.len(), 3);
    assert!(specs[0]
        .quasi_identifiers
        .iter()
        .all(|qi| qi.generalization == Generalization::Raw));
    assert_eq!(
        specs[1].quasi_identifiers[0].generalization,
        Generalization::Band { width: 10 }
    );
    assert_eq!(specs[1].thresholds.t_max, 0.34);
}

#[test]
fn test_missing_scenarios_rejected() {
    let file = write_config(
        r#"
[application]
name = "reidrisk"

[dataset]
path = "patients.json"
sensitive_attribute = "Diagnosis"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("scenario"));
}

#[test]
fn test_out_of_range_threshold_rejected() {
    let file = write_config(
        r#"
[application]
name = "reidrisk"

[dataset]
path = "patients.json"
sensitive_attribute = "Diagnosis"

[[scenario]]
name = "bad"

[[scenario.quasi_identifier]]
attribute = "Age"

[scenario.thresholds]
k_min = 2
l_min = 2
t_max = 1.5
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("REIDRISK_IT_DATASET", "substituted.json");
    let file = write_config(&FULL_CONFIG.replace(
        "path = \"patients.json\"",
        "path = \"${REIDRISK_IT_DATASET}\"",
    ));
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.dataset.path, "substituted.json");
    std::env::remove_var("REIDRISK_IT_DATASET");
}

#[test]
fn test_env_override_for_sensitive_attribute() {
    std::env::set_var("REIDRISK_DATASET_SENSITIVE_ATTRIBUTE", "Condition");
    let file = write_config(FULL_CONFIG);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.dataset.sensitive_attribute, "Condition");
    std::env::remove_var("REIDRISK_DATASET_SENSITIVE_ATTRIBUTE");
}
