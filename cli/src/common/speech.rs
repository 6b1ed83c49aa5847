//! # Neurolixir Speech Output (`common::speech`)
//!
//! File: cli/src/common/speech.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Audio side of the output collaborators. Text is spoken by running an
//! external text-to-speech program with the text as its last argument:
//! `say` on macOS, `espeak` elsewhere, or whatever `[speech] command` names
//! in the configuration.
//!
//! Speaking is fire-and-forget. A missing program or a non-zero exit is logged
//! with `warn!` and never reaches the caller. The call does block until the
//! program exits so consecutive replies don't talk over each other.
//!
use crate::core::config::SpeechConfig;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Speaks text through an external TTS command.
#[derive(Debug, Clone)]
pub struct Speaker {
    command: String,
    args: Vec<String>,
}

impl Speaker {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Speaks `text`. Returns whether the TTS program ran successfully.
    pub fn speak(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        debug!("Speaking via '{}': {:?}", self.command, text);

        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => true,
            Ok(status) => {
                warn!("Speech command '{}' exited with {}", self.command, status);
                false
            }
            Err(e) => {
                warn!("Failed to run speech command '{}': {}", self.command, e);
                false
            }
        }
    }
}
