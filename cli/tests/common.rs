//! # Neurolixir CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! (other than this module) is compiled as its own test crate and runs the
//! compiled `neurolixir` binary.
//!
//! `Sandbox` isolates a run from the developer's machine: the binary gets a
//! fresh temporary HOME / config directory and working directory, and the
//! `NEUROLIXIR_*` environment variables are cleared.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command for the compiled `neurolixir` binary.
pub fn neurolixir_cmd() -> Command {
    Command::cargo_bin("neurolixir").expect("Failed to find neurolixir binary for testing")
}

/// A temporary home + working directory for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create sandbox dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `gpt.txt` in the sandbox and returns its path.
    pub fn dialogue_file(&self, contents: &str) -> PathBuf {
        self.write("gpt.txt", contents)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write sandbox file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read sandbox file")
    }

    /// `neurolixir` running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = neurolixir_cmd();
        let home = self.dir.path().join("home");
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("NEUROLIXIR_DIALOGUE_FILE")
            .env_remove("NEUROLIXIR_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `neurolixir --file <sandbox>/gpt.txt ...`.
    pub fn cmd_with_dialogue(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--file").arg(self.dir.path().join("gpt.txt"));
        cmd
    }
}
