//! Integration tests for the kakebo CLI.
//!
//! These tests run the actual binary over the ledgers in `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_kakebo(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Write a throwaway ledger file
fn ledger_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_balance() {
    let output = run_kakebo(&["balance", &test_data_path("dues.txt")]);
    assert_eq!(output, "1215.25\n");
}

#[test]
fn test_format_entries() {
    let output = run_kakebo(&["format", &test_data_path("entries.txt")]);
    assert_eq!(output, "Foo\t1.20\nBar\t3.45\nBaz\t6.00\nXyzzy\t78.09\n");
}

#[test]
fn test_total_of_dot_separated_entries() {
    let ledger = ledger_file("1.2 foo\n3.45 bar\n6 baz\n78.09 xyzzy\n");
    let output = run_kakebo(&["total", ledger.path().to_str().unwrap()]);
    assert_eq!(output, "88.74\n");
}

#[test]
fn test_total_rejects_comma_separator() {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.arg("total")
        .arg(test_data_path("entries.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: can't convert 1,2 to decimal",
        ));
}

#[test]
fn test_month_report() {
    let output = run_kakebo(&[
        "month",
        "--date",
        "2009-11-10",
        &test_data_path("entries.txt"),
    ]);

    assert_eq!(
        output,
        "November 2009\n\nFoo\t1,20\nBar\t3,45\nBaz\t6,00\nXyzzy\t78,09\n\nTot\t88,74\n"
    );
}

#[test]
fn test_stats_report() {
    let output = run_kakebo(&[
        "stats",
        "--date",
        "2009-11-10",
        "--save",
        "10",
        &test_data_path("budget_dues.txt"),
        &test_data_path("november.txt"),
    ]);

    assert_eq!(
        output,
        "10 November 2009\n\n\
         Save goal\t100,00\n\
         Monthly budget\t900,00\n\
         Daily budget\t30,00\n\n\
         End of month\t33%\n\
         Amount spent\t11%\n"
    );
}

#[test]
fn test_stats_default_save_percentage() {
    let output = run_kakebo(&[
        "stats",
        "--date",
        "2009-11-10",
        &test_data_path("budget_dues.txt"),
        &test_data_path("november.txt"),
    ]);
    assert!(output.contains("Save goal\t100,00\n"));
}

#[test]
fn test_stats_without_budget_fails() {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.args(["stats", "--save", "100"])
        .arg(test_data_path("budget_dues.txt"))
        .arg(test_data_path("november.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("monthly budget must be positive"));
}

#[test]
fn test_dues_listing() {
    let output = run_kakebo(&["dues", &test_data_path("dues.txt")]);
    assert_eq!(output, "Bar\t34,50\nFoo\t10,00\nBaz\t6,00\n");
}

#[test]
fn test_invalid_dues_listing_still_succeeds() {
    let output = run_kakebo(&["dues", &test_data_path("bad_dues.txt")]);
    assert_eq!(output, "invalid dues");
}

#[test]
fn test_balance_of_invalid_dues_fails() {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.arg("balance")
        .arg(test_data_path("bad_dues.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: at least 2 fields required"));
}

#[test]
fn test_balance_of_empty_ledger_fails() {
    let ledger = ledger_file("");
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.arg("balance")
        .arg(ledger.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 fields required"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.args(["balance", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing command"));
}

#[test]
fn test_unknown_command_error() {
    let mut cmd = Command::cargo_bin("kakebo").unwrap();
    cmd.arg("forecast")
        .arg(test_data_path("dues.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command 'forecast'"));
}
