//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn scrub(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scrub").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("--no-color");
    cmd
}

#[test]
fn missing_input_is_not_found() {
    let temp = TempDir::new().unwrap();
    scrub(&temp)
        .args(["template", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn unsupported_extension_is_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.yaml"), "a: 1").unwrap();

    scrub(&temp)
        .args(["template", "data.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".json or .toml"));
}

#[test]
fn invalid_json_is_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.json"), "{ nope").unwrap();

    scrub(&temp)
        .args(["preset", "bad.json", "dev"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn unique_on_object_is_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("obj.json"), r#"{"a": 1}"#).unwrap();

    scrub(&temp)
        .args(["unique", "obj.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected an array"));
}

#[test]
fn unknown_preset_in_config_lists_presets() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.json"), "{}").unwrap();

    scrub(&temp)
        .env("SCRUB__DEFAULTS__PRESET", "staging")
        .args(["preset", "in.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown preset 'staging'"))
        .stderr(predicate::str::contains("production"));
}

#[test]
fn unknown_config_key_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    scrub(&temp)
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    scrub(&temp)
        .args(["-c", "absent.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn missing_snapshot_is_not_found() {
    let temp = TempDir::new().unwrap();
    scrub(&temp)
        .args(["storage", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn bad_workflow_name_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    scrub(&temp)
        .args(["workflow", "in.json", "publish"])
        .assert()
        .code(2);
}
