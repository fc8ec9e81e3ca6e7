//! Integration tests that run whole sessions against an on-disk parameter
//! file fixture.
//!
//! Runs here only read the fixture: no `--set` or `--reset`, so the file is
//! never rewritten.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use pretty_assertions::assert_eq;
use roi_cli::app;
use roi_cli::config::Cli;

/// Path to the shared session shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("shared_session.csv")
}

/// Runs the fixture session with `extra` arguments and returns the report.
fn run_with(extra: &[&str]) -> String {
    let args: Vec<OsString> = ["rental-roi", "--params"]
        .into_iter()
        .map(OsString::from)
        .chain([fixture_path().into_os_string()])
        .chain(extra.iter().map(OsString::from))
        .collect();
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    app::run(&cli, today).expect("run should succeed").report
}

fn run_csv() -> String {
    run_with(&["--format", "csv"])
}

fn value_of(
    report: &str,
    key: &str,
) -> String {
    report
        .lines()
        .map(|line| line.rsplitn(2, ',').collect::<Vec<_>>())
        .find(|parts| parts[1].split(',').nth(1) == Some(key))
        .map(|parts| parts[0].to_string())
        .unwrap_or_else(|| panic!("no row for {key}"))
}

#[test]
fn test_fixture_session_results() {
    let report = run_csv();

    assert_eq!(value_of(&report, "totalPurchasePrice"), "226000");
    assert_eq!(value_of(&report, "monthlyMortgagePayment"), "1044");
    // 1000 − 100 − 1200 / 12
    assert_eq!(value_of(&report, "netMonthlyIncome"), "800");
    assert_eq!(value_of(&report, "grossYield"), "5.31");
    assert_eq!(value_of(&report, "netYield"), "4.25");
    assert_eq!(value_of(&report, "monthlyCashflow"), "-244");
}

#[test]
fn test_fixture_unknown_keys_are_ignored() {
    let report = run_csv();

    assert!(!report.contains("campaign"));
    assert!(!report.contains("spring"));
}

#[test]
fn test_fixture_text_report() {
    let report = run_with(&[]);

    assert!(report.starts_with("Purchase\n"));
    assert!(report.contains(&format!("  {:<26}{:>12}", "Net yield (%)", "4.25")));
}
