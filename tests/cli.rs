use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("loadline").unwrap()
}

#[test]
fn reference_run_reports_both_solvers_and_writes_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iv.txt");

    cmd()
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("---- Results ----"))
        .stdout(contains("Newton: U = 0.97"))
        .stdout(contains("Bisection: U = 0.97"))
        .stdout(contains("IV data written to"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 102);
}

#[test]
fn bad_bracket_is_reported_not_fatal() {
    cmd()
        .args(["--bracket-low", "0", "--bracket-high", "0.5", "--no-sweep"])
        .assert()
        .success()
        .stdout(contains("Newton: U = "))
        .stdout(contains("Bisection failed (no sign change on interval) (iterations=0)"));
}

#[test]
fn exhausted_budget_is_reported() {
    cmd()
        .args(["--max-iterations", "2", "--no-sweep"])
        .assert()
        .success()
        .stdout(contains("Newton did not converge within 2 iterations"))
        .stdout(contains("Bisection did not converge within 2 iterations"));
}

#[test]
fn unwritable_sweep_path_keeps_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("iv.txt");

    cmd()
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Newton: U = "))
        .stdout(contains("IV data written").not())
        .stderr(contains("Failed to write sweep file"));
}

#[test]
fn invalid_constant_is_rejected() {
    cmd()
        .args(["--resistance=-5", "--no-sweep"])
        .assert()
        .failure()
        .stderr(contains("series_resistance"));
}

#[test]
fn zero_tolerance_is_rejected() {
    cmd()
        .args(["--tolerance", "0", "--no-sweep"])
        .assert()
        .failure()
        .stderr(contains("tolerance"));
}

#[test]
fn reversed_bracket_is_not_reported_as_converged() {
    cmd()
        .args(["--bracket-low", "1", "--bracket-high", "0", "--no-sweep"])
        .assert()
        .success()
        .stdout(contains("Bisection failed (no sign change on interval) (iterations=0)"));
}

#[test]
fn sweep_step_finer_than_voltage_column_is_rejected() {
    cmd()
        .args(["--step", "0.001", "--points", "11"])
        .assert()
        .failure()
        .stderr(contains("step must be a multiple"));
}
