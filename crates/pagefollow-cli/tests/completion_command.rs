use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_completion_bash_mentions_binary_name() {
    Command::cargo_bin("pagefollow")
        .unwrap()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagefollow"));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    Command::cargo_bin("pagefollow")
        .unwrap()
        .arg("completion")
        .arg("tcsh")
        .assert()
        .failure();
}
