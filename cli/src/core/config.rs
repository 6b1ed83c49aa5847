//! # Neurolixir Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates Neurolixir's configuration. Every
//! setting has a built-in default, so no configuration file is required.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags and environment variables (applied by the commands)
//! 2. Project-specific `.neurolixir.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/neurolixir/config.toml` on Linux)
//! 4. Default values defined in the code
//!
//! ## Example File
//!
//! ```toml
//! [dialogue]
//! file = "~/notes/gpt.txt"
//! fallback_message = "Sorry, I don't know that one."
//!
//! [speech]
//! enabled = true
//! command = "espeak"
//! args = ["-s", "150"]
//!
//! [remote]
//! provider = "deepseek"
//! model = "deepseek-chat"
//! temperature = 0.7
//! ```
//!
//! The configuration is loaded once per command execution and passed to the
//! code that needs it.
//!
use crate::common::network::chat::{
    self, ChatEndpoint, DEEPSEEK_DEFAULT_MODEL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE,
};
use crate::core::error::{NeurolixirError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub dialogue: DialogueConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// The dialogue store and how replies are presented.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DialogueConfig {
    /// Backing source of question=answer pairs (can use ~). Will be expanded.
    #[serde(default = "default_dialogue_file")]
    pub file: String,
    /// Reply used when no stored question matches.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    /// Text printed before each `ask` reply.
    #[serde(default)]
    pub prefix: String,
    /// Text printed after each `ask` reply.
    #[serde(default)]
    pub suffix: String,
}

/// Text-to-speech output.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Speak replies without passing `--speak`.
    #[serde(default)]
    pub enabled: bool,
    /// TTS program; the text is passed as its last argument.
    #[serde(default = "default_speech_command")]
    pub command: String,
    /// Extra arguments placed before the text.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Remote chat provider settings (`neurolixir remote`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Base URL, required when `provider = "url"`.
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// Named remote chat presets.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    DeepSeek,
    Url,
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "deepseek" => Ok(Provider::DeepSeek),
            "url" => Ok(Provider::Url),
            other => Err(format!(
                "unknown provider '{}' (expected openai, deepseek or url)",
                other
            )),
        }
    }
}

impl Provider {
    /// Model used when `remote.model` is left at its built-in default.
    pub fn default_model(self) -> &'static str {
        match self {
            Provider::DeepSeek => DEEPSEEK_DEFAULT_MODEL,
            Provider::OpenAi | Provider::Url => DEFAULT_MODEL,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::OpenAi => "openai",
            Provider::DeepSeek => "deepseek",
            Provider::Url => "url",
        })
    }
}

impl RemoteConfig {
    /// Resolves the configured provider to a chat endpoint.
    pub fn endpoint(&self) -> Result<ChatEndpoint> {
        match self.provider {
            Provider::OpenAi => Ok(ChatEndpoint::OpenAi),
            Provider::DeepSeek => Ok(ChatEndpoint::DeepSeek),
            Provider::Url => match self.base_url.as_deref() {
                Some(url) if !url.trim().is_empty() => Ok(ChatEndpoint::Custom {
                    base_url: url.trim().to_string(),
                }),
                _ => Err(anyhow!(NeurolixirError::Config(
                    "provider 'url' requires remote.base_url (or --url)".to_string()
                ))),
            },
        }
    }

    /// The configured model, or the provider's own default when `model` was not changed.
    pub fn effective_model(&self) -> &str {
        if self.model == DEFAULT_MODEL {
            self.provider.default_model()
        } else {
            &self.model
        }
    }

    /// Builds a chat request for `message` from these settings.
    pub fn request(&self, message: &str) -> chat::ChatRequest {
        chat::ChatRequest::new(message)
            .with_model(self.effective_model())
            .with_temperature(self.temperature)
            .with_system_prompt(self.system_prompt.clone())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            file: default_dialogue_file(),
            fallback_message: default_fallback_message(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_speech_command(),
            args: Vec::new(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_dialogue_file() -> String {
    "~/.config/neurolixir/gpt.txt".to_string()
}
fn default_fallback_message() -> String {
    "Please input valid content".to_string()
}
fn default_speech_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak".to_string()
    }
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}
fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".neurolixir.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Neurolixir", "neurolixir") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.neurolixir.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.neurolixir.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.dialogue.file = if project_cfg.dialogue.file != defaults.dialogue.file {
        project_cfg.dialogue.file
    } else {
        user.dialogue.file
    };
    merged.dialogue.fallback_message =
        if project_cfg.dialogue.fallback_message != defaults.dialogue.fallback_message {
            project_cfg.dialogue.fallback_message
        } else {
            user.dialogue.fallback_message
        };
    merged.dialogue.prefix = if !project_cfg.dialogue.prefix.is_empty() {
        project_cfg.dialogue.prefix
    } else {
        user.dialogue.prefix
    };
    merged.dialogue.suffix = if !project_cfg.dialogue.suffix.is_empty() {
        project_cfg.dialogue.suffix
    } else {
        user.dialogue.suffix
    };

    merged.speech.enabled = project_cfg.speech.enabled || user.speech.enabled;
    merged.speech.command = if project_cfg.speech.command != defaults.speech.command {
        project_cfg.speech.command
    } else {
        user.speech.command
    };
    merged.speech.args = if !project_cfg.speech.args.is_empty() {
        project_cfg.speech.args
    } else {
        user.speech.args
    };

    merged.remote.provider = if project_cfg.remote.provider != defaults.remote.provider {
        project_cfg.remote.provider
    } else {
        user.remote.provider
    };
    merged.remote.base_url = project_cfg.remote.base_url.or(user.remote.base_url);
    merged.remote.model = if project_cfg.remote.model != defaults.remote.model {
        project_cfg.remote.model
    } else {
        user.remote.model
    };
    merged.remote.temperature = if project_cfg.remote.temperature != defaults.remote.temperature {
        project_cfg.remote.temperature
    } else {
        user.remote.temperature
    };
    merged.remote.system_prompt =
        if project_cfg.remote.system_prompt != defaults.remote.system_prompt {
            project_cfg.remote.system_prompt
        } else {
            user.remote.system_prompt
        };
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.dialogue.file = shellexpand::tilde(&config.dialogue.file).into_owned();
    debug!("Expanded dialogue file path: {}", config.dialogue.file);
}

/// Checks values that would otherwise fail later in confusing ways.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.dialogue.file.trim().is_empty() {
        return Err(anyhow!(NeurolixirError::Config(
            "dialogue.file must not be empty".to_string()
        )));
    }
    if !(0.0..=2.0).contains(&config.remote.temperature) {
        return Err(anyhow!(NeurolixirError::Config(format!(
            "remote.temperature {} is outside 0.0..=2.0",
            config.remote.temperature
        ))));
    }
    if config.remote.provider == Provider::Url {
        config.remote.endpoint()?;
    }
    if config.speech.enabled && config.speech.command.trim().is_empty() {
        return Err(anyhow!(NeurolixirError::Config(
            "speech.command must not be empty when speech is enabled".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [dialogue]
            file = "~/notes/gpt.txt"
            fallback_message = "Sorry?"

            [speech]
            enabled = true
            args = ["-s", "150"]

            [remote]
            provider = "deepseek"
            model = "deepseek-chat"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.dialogue.file, "~/notes/gpt.txt"); // Not yet expanded
        assert_eq!(config.dialogue.fallback_message, "Sorry?");
        assert_eq!(config.dialogue.prefix, "");
        assert!(config.speech.enabled);
        assert_eq!(config.speech.command, default_speech_command());
        assert_eq!(config.speech.args, vec!["-s", "150"]);
        assert_eq!(config.remote.provider, Provider::DeepSeek);
        assert_eq!(config.remote.model, "deepseek-chat");
        assert_eq!(config.remote.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[dialogue]\nfiel = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config::default();
        config.dialogue.file = "~/gpt.txt".to_string();
        expand_config_paths(&mut config);
        assert!(!config.dialogue.file.starts_with('~'));
        assert!(config.dialogue.file.ends_with("gpt.txt"));

        config.dialogue.file = "/absolute/gpt.txt".to_string();
        expand_config_paths(&mut config);
        assert_eq!(config.dialogue.file, "/absolute/gpt.txt");
    }

    #[test]
    fn test_merge_prefers_project_overrides() {
        let mut user = Config::default();
        user.dialogue.file = "/user/gpt.txt".to_string();
        user.remote.model = "user-model".to_string();

        let mut project = Config::default();
        project.remote.model = "project-model".to_string();
        project.dialogue.prefix = "Bot: ".to_string();

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.dialogue.file, "/user/gpt.txt");
        assert_eq!(merged.remote.model, "project-model");
        assert_eq!(merged.dialogue.prefix, "Bot: ");
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = Config::default();
        config.remote.temperature = 3.5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("outside 0.0..=2.0"));
    }

    #[test]
    fn test_url_provider_requires_base_url() {
        let mut config = Config::default();
        config.remote.provider = Provider::Url;
        assert!(validate_config(&config).is_err());

        config.remote.base_url = Some("http://localhost:11434/v1".to_string());
        assert!(validate_config(&config).is_ok());
        assert_eq!(
            config.remote.endpoint().unwrap(),
            ChatEndpoint::Custom {
                base_url: "http://localhost:11434/v1".to_string()
            }
        );
    }

    #[test]
    fn test_deepseek_uses_its_own_default_model() {
        let remote = RemoteConfig {
            provider: Provider::DeepSeek,
            ..RemoteConfig::default()
        };
        let request = remote.request("hi");
        assert_eq!(
            remote.endpoint().unwrap().completions_url(),
            "https://api.deepseek.com/chat/completions"
        );
        assert_eq!(request.model, "deepseek-chat");

        let custom = RemoteConfig {
            provider: Provider::DeepSeek,
            model: "deepseek-reasoner".to_string(),
            ..RemoteConfig::default()
        };
        assert_eq!(custom.request("hi").model, "deepseek-reasoner");
        assert_eq!(RemoteConfig::default().request("hi").model, DEFAULT_MODEL);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("OpenAI".parse::<Provider>(), Ok(Provider::OpenAi));
        assert_eq!("deepseek".parse::<Provider>(), Ok(Provider::DeepSeek));
        assert!("gemini".parse::<Provider>().is_err());
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_config_path(&nested), None);

        let config_path = root.path().join("a").join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[dialogue]\nprefix = \"> \"\n").unwrap();
        assert_eq!(find_project_config_path(&nested), Some(config_path.clone()));

        let loaded = load_config_from_path(&config_path).unwrap();
        assert_eq!(loaded.dialogue.prefix, "> ");
    }
}
