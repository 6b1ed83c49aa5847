//! # Neurolixir CLI Remote Integration Tests
//!
//! File: cli/tests/remote.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `neurolixir remote` failure paths that need no network service.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_remote_requires_api_key() {
    Sandbox::new()
        .cmd()
        .args(["remote", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key"));
}

#[test]
fn test_remote_url_provider_requires_url() {
    Sandbox::new()
        .cmd()
        .args(["remote", "--provider", "url", "--api-key", "sk-test", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires remote.base_url"));
}

#[test]
fn test_remote_rejects_out_of_range_temperature() {
    Sandbox::new()
        .cmd()
        .args(["remote", "--temperature", "5", "--api-key", "sk-test", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside 0.0..=2.0"));
}

#[test]
fn test_remote_unreachable_service_is_reported() {
    Sandbox::new()
        .cmd()
        .args(["remote", "--url", "http://127.0.0.1:9", "--api-key", "sk-test", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Remote chat request failed"));
}
