// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_release_dispatch_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-dispatch", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-dispatch"));
    assert!(stdout.contains("Forward a published release"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_release_dispatch_version() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-dispatch", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_dry_run_prints_payload() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "release-dispatch",
            "--",
            "--dry-run",
            "--ref",
            "refs/tags/v1.2.3",
        ])
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("GITHUB_EVENT_PATH")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"simulatorVersion\": \"1.2.3\""));
    assert!(stdout.contains("\"simulatorVersionLatest\": \"true\""));
    assert!(stdout.contains("/actions/workflows/ci.yml/dispatches"));
}

#[test]
fn test_missing_reference_exits_nonzero() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-dispatch", "--", "--dry-run"])
        .env_remove("GITHUB_REF")
        .env_remove("GITHUB_EVENT_NAME")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no reference given"));
}
