//! # Neurolixir Command Context
//!
//! File: cli/src/commands/context.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Most commands need the same three things: the merged configuration, the
//! dialogue store loaded from its backing source, and a resolver configured
//! with the fallback message. `CommandContext::open` builds them once per
//! invocation and hands them to the handler, so there is no process-wide
//! dialogue state.
//!
//! The dialogue source is chosen in this order:
//! 1. `--file <PATH>` / `NEUROLIXIR_DIALOGUE_FILE`
//! 2. `dialogue.file` from the configuration
//!
use crate::common::speech::Speaker;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::dialogue::resolver::MatchResolver;
use crate::dialogue::store::DialogueStore;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a dialogue command needs for one invocation.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    pub store: DialogueStore,
    pub resolver: MatchResolver,
}

impl CommandContext {
    /// Loads configuration, then the dialogue store it (or `file_override`) points at.
    pub fn open(file_override: Option<&Path>) -> Result<Self> {
        let config = config::load_config().context("Failed to load Neurolixir configuration")?;
        Self::from_config(config, file_override)
    }

    /// Builds a context from an already-loaded configuration.
    pub fn from_config(config: Config, file_override: Option<&Path>) -> Result<Self> {
        let path = dialogue_path(&config, file_override);
        debug!("Using dialogue source: {}", path.display());
        let store = DialogueStore::load(&path)?;
        let resolver = MatchResolver::new(config.dialogue.fallback_message.clone());
        Ok(Self {
            config,
            store,
            resolver,
        })
    }

    /// A speaker when `--speak` was passed or speech is enabled in the configuration.
    pub fn speaker(&self, speak_flag: bool) -> Option<Speaker> {
        (speak_flag || self.config.speech.enabled).then(|| Speaker::from_config(&self.config.speech))
    }
}

/// Resolves the backing source path, expanding `~` in an override.
pub fn dialogue_path(config: &Config, file_override: Option<&Path>) -> PathBuf {
    match file_override {
        Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned()),
        None => PathBuf::from(&config.dialogue.file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{kind_of, NeurolixirError};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_override_wins_over_config() {
        let mut config = Config::default();
        config.dialogue.file = "/from/config.txt".to_string();
        assert_eq!(dialogue_path(&config, None), PathBuf::from("/from/config.txt"));
        assert_eq!(
            dialogue_path(&config, Some(Path::new("/from/flag.txt"))),
            PathBuf::from("/from/flag.txt")
        );
    }

    #[test]
    fn test_override_tilde_is_expanded() {
        let path = dialogue_path(&Config::default(), Some(Path::new("~/gpt.txt")));
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_from_config_loads_store_and_fallback() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("gpt.txt");
        fs::write(&source, "hi=hello\nbye=goodbye\n").unwrap();

        let mut config = Config::default();
        config.dialogue.fallback_message = "Eh?".to_string();
        let ctx = CommandContext::from_config(config, Some(source.as_path())).unwrap();

        assert_eq!(ctx.store.len(), 2);
        assert_eq!(ctx.resolver.fallback(), "Eh?");
        assert!(ctx.speaker(false).is_none());
        assert!(ctx.speaker(true).is_some());
    }

    #[test]
    fn test_missing_source_is_not_an_empty_store() {
        let dir = tempdir().unwrap();
        let err = CommandContext::from_config(Config::default(), Some(dir.path().join("nope.txt").as_path()))
            .unwrap_err();
        assert!(matches!(
            kind_of(&err),
            Some(NeurolixirError::SourceUnavailable { .. })
        ));
    }
}
