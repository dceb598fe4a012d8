use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("smhi-weather").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("smhi-weather"))
        .stdout(predicate::str::contains("rainfall"));
}

#[test]
fn unreachable_api_fails_without_panicking() {
    let mut cmd = Command::cargo_bin("smhi-weather").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:9", "--timeout-secs", "2", "average"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("GET http://127.0.0.1:9"))
        .stderr(predicate::str::contains("panicked").not())
        .stderr(predicate::str::contains("WARN").not());
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn average_online() {
    let mut cmd = Command::cargo_bin("smhi-weather").unwrap();
    cmd.arg("average");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("average temperature"));
}
