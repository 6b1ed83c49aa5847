//! # Neurolixir Remote Command
//!
//! File: cli/src/commands/remote.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir remote`, which sends a message to an
//! OpenAI-compatible chat service instead of the local dialogue store and
//! prints the reply.
//!
//! Provider, model, temperature and system prompt come from the `[remote]`
//! configuration section; each has a flag that overrides it. The API key is
//! taken from `--api-key` or `NEUROLIXIR_API_KEY` and is never read from a
//! configuration file.
//!
//! ## Examples
//!
//! ```bash
//! export NEUROLIXIR_API_KEY=sk-...
//! neurolixir remote what is your name
//! neurolixir remote --provider deepseek --model deepseek-chat hello
//! neurolixir remote --provider url --url http://localhost:11434/v1 --model llama3 hi
//! ```
//!
use crate::common::network::chat::ChatClient;
use crate::core::config::{self, Provider, RemoteConfig};
use crate::core::error::{NeurolixirError, Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `neurolixir remote`.
#[derive(Parser, Debug)]
pub struct RemoteArgs {
    /// The message to send (multiple words are joined with spaces).
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,

    /// Chat provider: openai, deepseek or url (overrides `remote.provider`).
    #[arg(long)]
    provider: Option<Provider>,

    /// Base URL for the `url` provider (overrides `remote.base_url`).
    #[arg(long)]
    url: Option<String>,

    /// API key sent as a bearer token.
    #[arg(long, env = "NEUROLIXIR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name (overrides `remote.model`).
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature between 0.0 and 2.0 (overrides `remote.temperature`).
    #[arg(long)]
    temperature: Option<f32>,

    /// System prompt (overrides `remote.system_prompt`).
    #[arg(long)]
    system_prompt: Option<String>,
}

impl RemoteArgs {
    /// Applies the flags on top of the configured `[remote]` section.
    fn apply_to(&self, mut remote: RemoteConfig) -> RemoteConfig {
        if let Some(provider) = self.provider {
            remote.provider = provider;
        }
        if let Some(url) = &self.url {
            remote.base_url = Some(url.clone());
            // A bare --url implies the custom provider.
            if self.provider.is_none() {
                remote.provider = Provider::Url;
            }
        }
        if let Some(model) = &self.model {
            remote.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            remote.temperature = temperature;
        }
        if let Some(prompt) = &self.system_prompt {
            remote.system_prompt = prompt.clone();
        }
        remote
    }
}

/// # Handle Remote Command (`handle_remote`)
///
/// Builds the effective remote settings, sends one chat turn and prints the reply.
/// Failures from the service surface as `NeurolixirError::RemoteChat`.
pub async fn handle_remote(args: RemoteArgs) -> Result<()> {
    info!("Handling remote command...");
    let mut cfg = config::load_config().context("Failed to load Neurolixir configuration")?;
    cfg.remote = args.apply_to(cfg.remote);
    config::validate_config(&cfg)?;

    let api_key = match args.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => anyhow::bail!(NeurolixirError::Config(
            "no API key given; pass --api-key or set NEUROLIXIR_API_KEY".to_string()
        )),
    };

    let endpoint = cfg.remote.endpoint()?;
    let client = ChatClient::new(endpoint, api_key)?;
    let request = cfg.remote.request(&args.message.join(" "));
    let reply = client.send_chat(&request).await?;
    println!("{}", reply);
    Ok(())
}
