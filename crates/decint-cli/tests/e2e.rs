//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn decint() -> Command {
    Command::cargo_bin("decint").expect("binary not found")
}

#[test]
fn help_flag() {
    decint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal"));
}

#[test]
fn version_flag() {
    decint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("decint"));
}

#[test]
fn add_large_operands() {
    decint()
        .args([
            "add",
            "123456789012345678901234567890",
            "987654321098765432109876543210",
            "-q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1111111110111111111011111111100"));
}

#[test]
fn signed_truncated_division() {
    decint()
        .args(["div", "-7", "2", "-q"])
        .assert()
        .success()
        .stdout(predicate::eq("-3\n"));
    decint()
        .args(["mod", "-7", "2", "-q"])
        .assert()
        .success()
        .stdout(predicate::eq("-1\n"));
}

#[test]
fn comparison_output() {
    decint()
        .args(["cmp", "-10", "3", "-q"])
        .assert()
        .success()
        .stdout(predicate::eq("<\n"));
}

#[test]
fn default_output_echoes_operands() {
    decint()
        .args(["mul", "6", "7"])
        .assert()
        .success()
        .stdout(predicate::eq("6 * 7 = 42\n"));
}

#[test]
fn division_by_zero_fails() {
    decint()
        .args(["div", "1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn malformed_operand_fails() {
    decint()
        .args(["add", "12a", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}
