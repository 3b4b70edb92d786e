//! End-to-end tests for the `active-services` binary.

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

/// A command isolated from the developer's own config and environment.
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("active-services").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_default_operations() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user/create"));
}

#[test]
fn test_run_success_exits_zero() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "run",
            "user/create",
            "-a",
            "name=Ada",
            "-a",
            "email=ada@example.com",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("user/create succeeded"));
}

#[test]
fn test_run_validation_failure_is_reported_not_raised() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["run", "user/create", "-a", "email=ada@example.com"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("Name can't be blank"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_run_json_output() {
    let home = TempDir::new().unwrap();
    let output = cmd(&home)
        .args(["--output-format", "json", "run", "user/create"])
        .assert()
        .code(5)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["operation"], "user/create");
    assert_eq!(json["success"], false);
    assert_eq!(
        json["errors"],
        serde_json::json!(["Name can't be blank", "Email can't be blank"])
    );
}

#[test]
fn test_unknown_operation_exits_not_found() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["run", "user/archive"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No operation registered as 'user/archive'"));
}

#[test]
fn test_malformed_attribute_exits_user_error() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["run", "user/create", "-a", "name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_models_from_config_file() {
    let home = TempDir::new().unwrap();
    let file = config_file(
        r#"
[models.account.defaults]
plan = "free"

[[models.account.rules]]
attribute = "plan"
kind = "inclusion"
in = ["free", "pro"]
"#,
    );

    cmd(&home)
        .arg("--config")
        .arg(file.path())
        .args(["run", "account/create", "-a", "plan=enterprise"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("Plan is not included in the list"));

    cmd(&home)
        .arg("--config")
        .arg(file.path())
        .args(["run", "account/create"])
        .assert()
        .code(0);
}

#[test]
fn test_missing_config_file_exits_configuration_error() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--config", "/definitely/not/here.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_env_overrides_output_format() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .env("ACTIVE_SERVICES__OUTPUT__FORMAT", "json")
        .args(["run", "user/create", "-a", "name=Ada", "-a", "email=a@b.c"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"success\": true"));
}

#[test]
fn test_config_show_prints_toml() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("presence"));
}
