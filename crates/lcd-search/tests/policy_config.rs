use std::fs;

use lcd_core::ValidatorConfig;
use lcd_search::{load_policy, policy_from_yaml};
use tempfile::tempdir;

#[test]
fn yaml_policy_fills_missing_flags_with_defaults() {
    let policy = policy_from_yaml("append_identity: true\nrequire_hermitian_lcd: true\n").unwrap();
    assert_eq!(
        policy,
        ValidatorConfig {
            append_identity: true,
            require_hermitian_lcd: true,
            ..ValidatorConfig::default()
        }
    );
}

#[test]
fn policy_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.yaml");
    let policy = ValidatorConfig {
        restrict_generation: true,
        multithreaded: true,
        threads: 3,
        ..ValidatorConfig::default()
    };
    fs::write(&path, serde_yaml::to_string(&policy).unwrap()).unwrap();
    assert_eq!(load_policy(&path).unwrap(), policy);
}

#[test]
fn missing_policy_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_policy(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code(), "policy-read");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn malformed_policy_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.yaml");
    fs::write(&path, "threads: many\n").unwrap();
    let err = load_policy(&path).unwrap_err();
    assert_eq!(err.code(), "policy-parse");
    assert_eq!(
        err.info().context.get("path").map(String::as_str),
        Some(path.display().to_string().as_str())
    );
}
