use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version_flag_reports_package_version() {
    let mut cmd = Command::cargo_bin("ttywatch").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ttywatch"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
