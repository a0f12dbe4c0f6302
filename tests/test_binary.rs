//! End-to-end tests for the `thermophi convert` command

use assert_cmd::Command;
use predicates::prelude::*;

fn thermophi() -> Command {
    Command::cargo_bin("thermophi").unwrap()
}

#[test]
fn test_plain_output() {
    thermophi()
        .args(["convert", "100", "--plain"])
        .assert()
        .success()
        .stdout("212.00° Fahrenheit\n");
}

#[test]
fn test_plain_negative_fahrenheit_to_celsius() {
    thermophi()
        .args(["convert", "-40", "--from", "fahrenheit", "--to", "celsius", "--plain"])
        .assert()
        .success()
        .stdout("-40.00° Celsius\n");
}

#[test]
fn test_summary_output_contains_result() {
    thermophi()
        .args(["convert", "0", "--to", "kelvin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("273.15° Kelvin"))
        .stdout(predicate::str::contains("CONVERSION SUMMARY"));
}

#[test]
fn test_json_output() {
    let output = thermophi()
        .args(["convert", "32", "--from", "f", "--to", "c", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["input"], 32.0);
    assert_eq!(json["from"], "fahrenheit");
    assert_eq!(json["to"], "celsius");
    assert_eq!(json["value"], 0.0);
    assert_eq!(json["display"], "0.00° Celsius");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_invalid_input_fails() {
    thermophi()
        .args(["convert", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid number"));
}

#[test]
fn test_unknown_scale_is_usage_error() {
    thermophi()
        .args(["convert", "1", "--from", "rankine"])
        .assert()
        .failure()
        .code(2);
}
