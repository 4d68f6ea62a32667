//! CLI integration tests for the bunker binary

use assert_cmd::Command;
use predicates::prelude::*;

fn test_cmd() -> Command {
    Command::cargo_bin("bunker").unwrap()
}

#[test]
fn test_help_command() {
    test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bunker - helpers for dates, errors and HTTP"))
        .stdout(predicate::str::contains("add-days"))
        .stdout(predicate::str::contains("errors"))
        .stdout(predicate::str::contains("request"));
}

#[test]
fn test_version_command() {
    test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bunker 0.1.0"));
}

#[test]
fn test_add_days_reference_scenario() {
    test_cmd()
        .args(["add-days", "--start", "2022-10-03", "--count", "7"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2022-10-12\n"));
}

#[test]
fn test_add_days_with_holidays() {
    test_cmd()
        .args([
            "add-days",
            "--start",
            "2022-10-03",
            "--count",
            "7",
            "--holiday",
            "2022-10-08",
            "--holiday",
            "2022-10-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("2022-10-13\n"));
}

#[test]
fn test_add_days_rejects_negative_count() {
    test_cmd()
        .args(["add-days", "--start", "2022-10-03", "--count", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count"));
}

#[test]
fn test_add_days_rejects_bad_date() {
    test_cmd()
        .args(["add-days", "--start", "10/03/2022", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_error_by_number_and_code() {
    test_cmd()
        .args(["error", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""error_code":"IE-05""#))
        .stdout(predicate::str::contains(r#""http_status_code":404"#));

    test_cmd()
        .args(["error", "IE-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""message":"Teapot""#));
}

#[test]
fn test_unknown_error_code() {
    test_cmd()
        .args(["error", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown application error code"));
}

#[test]
fn test_errors_lists_catalog() {
    test_cmd()
        .env("NO_COLOR", "1")
        .arg("errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("IE-01"))
        .stdout(predicate::str::contains("IE-29"))
        .stdout(predicate::str::contains("Unavailable For Legal Reasons"));
}

#[test]
fn test_request_rejects_unknown_method() {
    test_cmd()
        .args(["request", "TRACE", "http://127.0.0.1:9/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TRACE"));
}
