use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The fixture holds four rows with one duplicate.
#[test]
fn test_inspect_reports_distinct_targets_in_order() {
    let report = pagefollow_cli::commands::check::inspect(&fixture("targets.csv")).unwrap();

    assert_eq!(report.targets, 3);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(
        report.urls[0],
        "https://www.example.com/company/acme/careers"
    );
    assert_eq!(
        report.urls[1],
        "https://www.example.com/company/globex/careers"
    );
}

#[test]
fn test_check_command_prints_counts() {
    Command::cargo_bin("pagefollow")
        .unwrap()
        .arg("check")
        .arg(fixture("targets.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 target(s)"))
        .stdout(predicate::str::contains("1 duplicate row(s) removed"));
}

#[test]
fn test_check_command_json_format() {
    Command::cargo_bin("pagefollow")
        .unwrap()
        .arg("check")
        .arg(fixture("targets.csv"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"targets\": 3"))
        .stdout(predicate::str::contains("\"duplicates_removed\": 1"));
}

#[test]
fn test_check_command_missing_file_fails() {
    Command::cargo_bin("pagefollow")
        .unwrap()
        .arg("check")
        .arg("/nonexistent/targets.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load targets"));
}

/// `run` validates the target file before prompting for anything, so a
/// missing file must fail without touching a browser or the terminal.
#[test]
fn test_run_command_missing_file_fails_before_prompts() {
    Command::cargo_bin("pagefollow")
        .unwrap()
        .arg("run")
        .arg("--file")
        .arg("/nonexistent/targets.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load targets"));
}
