//! # Neurolixir CLI Duration Integration Tests
//!
//! File: cli/tests/duration.rs
//! Author: Christi Mahu
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_duration_breakdown() {
    neurolixir_cmd()
        .args(["duration", "2", "h"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("   seconds: 7200\n")
                .and(predicate::str::contains("   minutes: 120\n"))
                .and(predicate::str::contains("     hours: 2\n")),
        );
}

#[test]
fn test_duration_wait() {
    neurolixir_cmd()
        .args(["duration", "0.05", "seconds", "--wait"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Waiting 0.05 seconds...").and(predicate::str::ends_with("Done.\n")));
}

#[test]
fn test_duration_unknown_unit() {
    neurolixir_cmd()
        .args(["duration", "3", "fortnights"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown time unit"));
}

#[test]
fn test_duration_negative_wait_fails() {
    neurolixir_cmd()
        .args(["duration", "-1", "s", "--wait"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot wait"));
}
