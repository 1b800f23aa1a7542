use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_includes_required_options() {
    let mut cmd = Command::cargo_bin("ttywatch").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--bell"))
        .stdout(predicate::str::contains("--interval"))
        .stdout(predicate::str::contains("USER"))
        .stdout(predicate::str::contains("--version"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_help_describes_interval_option() {
    let mut cmd = Command::cargo_bin("ttywatch").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Poll interval"))
        .stdout(predicate::str::contains("SECONDS"));
}

#[test]
fn test_help_describes_user_restriction() {
    let mut cmd = Command::cargo_bin("ttywatch").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("users"));
}
