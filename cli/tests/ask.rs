//! # Neurolixir CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `neurolixir ask`: matching, fallback, reply
//! decoration, the dynamic clock answer and how the dialogue file is chosen.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_exact_match() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("hi=hello\nbye=goodbye\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "hi"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_ask_near_match_joins_words() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("how are you=fine, thanks\nwhat is your name=Neurolixir\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "what's", "your", "name"])
        .assert()
        .success()
        .stdout("Neurolixir\n");
}

#[test]
fn test_ask_fallback_when_nothing_matches() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("hi=hello\nbye=goodbye\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "zzz"])
        .assert()
        .success()
        .stdout("Please input valid content\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "--fallback", "No idea.", "zzz"])
        .assert()
        .success()
        .stdout("No idea.\n");
}

#[test]
fn test_ask_empty_store_uses_fallback() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("this line has no delimiter\n\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "hi"])
        .assert()
        .success()
        .stdout("Please input valid content\n");
}

#[test]
fn test_ask_prefix_and_suffix() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("hi=hello\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "--prefix", "Bot: ", "--suffix", " :)", "hi"])
        .assert()
        .success()
        .stdout("Bot: hello :)\n");
}

#[test]
fn test_ask_dynamic_time_answer() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("what time is it=time\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "what", "time", "is", "it"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\w{3} \w{3} [ \d]\d \d{2}:\d{2}:\d{2} \d{4}\n$").unwrap());
}

#[test]
fn test_ask_missing_dialogue_file_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["--file", "missing.txt", "ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be opened"));
}

#[test]
fn test_ask_reads_file_from_environment() {
    let sandbox = Sandbox::new();
    let path = sandbox.dialogue_file("hi=hello from env\n");

    sandbox
        .cmd()
        .env("NEUROLIXIR_DIALOGUE_FILE", &path)
        .args(["ask", "hi"])
        .assert()
        .success()
        .stdout("hello from env\n");
}

#[test]
fn test_ask_uses_project_config() {
    let sandbox = Sandbox::new();
    let path = sandbox.dialogue_file("hi=hello\n");
    sandbox.write(
        ".neurolixir.toml",
        &format!(
            "[dialogue]\nfile = '{}'\nprefix = \"> \"\n",
            path.display()
        ),
    );

    sandbox
        .cmd()
        .args(["ask", "hi"])
        .assert()
        .success()
        .stdout("> hello\n");
}

#[test]
fn test_ask_rejects_invalid_project_config() {
    let sandbox = Sandbox::new();
    sandbox.dialogue_file("hi=hello\n");
    sandbox.write(".neurolixir.toml", "[remote]\ntemperature = 9.0\n");

    sandbox
        .cmd_with_dialogue()
        .args(["ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature"));
}
