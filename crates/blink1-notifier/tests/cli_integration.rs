//! Integration tests for the `blink1-notifier` binary.
//!
//! Every test points `--config` at a temp dir so the user's real
//! configuration is never read or written.

use std::net::TcpListener;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("blink1-notifier")
}

fn cli_with(config: &Path) -> assert_cmd::Command {
    let mut cmd = cli();
    cmd.arg("--config").arg(config);
    cmd
}

/// A base URL on localhost with nothing listening.
fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blink1-notifier"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_config_json_produces_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let output = cli_with(&path)
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert_eq!(json["config_file_exists"], false);
    assert_eq!(json["settings"]["blink_interface"], "webApi");
    assert_eq!(json["settings"]["url_base"], "http://localhost:8934");
}

#[test]
fn cli_configure_then_config_shows_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    cli_with(&path)
        .args([
            "configure",
            "--interface",
            "commandline",
            "--command-path",
            "/opt/blink1/blink1-tool",
            "--success-color",
            "blue",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    cli_with(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("commandline"))
        .stdout(predicate::str::contains("/opt/blink1/blink1-tool"))
        .stdout(predicate::str::contains("blue (#0000ff)"));
}

#[test]
fn cli_configure_rejects_bad_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli_with(&path)
        .args(["configure", "--url-base", "ftp://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL should start with http:// or https://."));
    assert!(!path.exists());
}

#[test]
fn cli_configure_force_saves_bad_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli_with(&path)
        .args(["configure", "--url-base", "localhost:8934", "--force"])
        .assert()
        .success();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("url_base = \"localhost:8934\""), "{contents}");
}

#[test]
fn cli_check_url() {
    cli().args(["check-url", "https://x"]).assert().success();
    cli()
        .args(["check-url", "ftp://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL should start with"));
}

#[test]
fn cli_notify_with_unreachable_device_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli_with(&path)
        .args(["configure", "--url-base", &closed_url()])
        .assert()
        .success();

    cli_with(&path)
        .args(["notify", "FAILURE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notification failed"));
}

#[test]
fn cli_notify_with_missing_tool_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli_with(&path)
        .args([
            "configure",
            "--interface",
            "commandline",
            "--command-path",
            "/nonexistent/blink1-tool",
        ])
        .assert()
        .success();

    cli_with(&path).args(["notify", "garbage"]).assert().success();
}

#[test]
fn cli_set_rejects_bad_color() {
    let dir = tempfile::tempdir().unwrap();
    cli_with(&dir.path().join("config.toml"))
        .args(["set", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn cli_test_is_informational_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli_with(&dir.path().join("config.toml"))
        .args(["--json", "test", "--url-base", &closed_url()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["interface"], "webApi");
    assert_eq!(json["sent"], false);
    assert!(json["message"].as_str().unwrap().starts_with("Error occurred: "));
}

#[cfg(unix)]
#[test]
fn cli_test_commandline_candidate() {
    let dir = tempfile::tempdir().unwrap();
    cli_with(&dir.path().join("config.toml"))
        .args(["test", "--interface", "commandline", "--command-path", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command executed: true --rgb 0,0,255 --blink 3",
        ));
}

#[test]
fn cli_verbose_flag_accepted() {
    let dir = tempfile::tempdir().unwrap();
    cli_with(&dir.path().join("config.toml"))
        .args(["-v", "config"])
        .assert()
        .success();
}
