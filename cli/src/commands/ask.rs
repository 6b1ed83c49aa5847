//! # Neurolixir Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir ask`, a single non-interactive lookup. The words
//! given on the command line are joined with spaces, resolved against the
//! dialogue store, and the reply is printed as `{prefix}{answer}{suffix}`.
//!
//! `--prefix`, `--suffix` and `--fallback` override the `[dialogue]` values
//! from the configuration for this call only.
//!
//! ## Examples
//!
//! ```bash
//! neurolixir ask what time is it
//! neurolixir ask --prefix "Bot: " hello
//! neurolixir --file ./faq.txt ask --fallback "No idea." how do I reset my password
//! ```
//!
use crate::commands::context::CommandContext;
use crate::common::ui;
use crate::core::error::Result;
use crate::dialogue::resolver::MatchResolver;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

/// Arguments for `neurolixir ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The text to look up (multiple words are joined with spaces).
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Speak the reply through the configured text-to-speech command.
    #[arg(long)]
    speak: bool,

    /// Printed before the reply (overrides `dialogue.prefix`).
    #[arg(long, allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Printed after the reply (overrides `dialogue.suffix`).
    #[arg(long, allow_hyphen_values = true)]
    suffix: Option<String>,

    /// Reply used when nothing matches (overrides `dialogue.fallback_message`).
    #[arg(long)]
    fallback: Option<String>,
}

impl AskArgs {
    fn input(&self) -> String {
        self.text.join(" ")
    }
}

/// # Handle Ask Command (`handle_ask`)
///
/// Resolves the input once and presents the reply (or the fallback).
pub async fn handle_ask(args: AskArgs, file_override: Option<&Path>) -> Result<()> {
    info!("Handling ask command...");
    let mut ctx = CommandContext::open(file_override)?;
    if let Some(fallback) = &args.fallback {
        ctx.resolver = MatchResolver::new(fallback.clone());
    }

    let input = args.input();
    let outcome = ctx.resolver.resolve(&input, &ctx.store);
    debug!(
        "Ask {:?} -> matched {:?} (score {:.2}, fallback: {})",
        input, outcome.matched_question, outcome.score, outcome.used_fallback
    );

    let prefix = args.prefix.as_deref().unwrap_or(&ctx.config.dialogue.prefix);
    let suffix = args.suffix.as_deref().unwrap_or(&ctx.config.dialogue.suffix);
    ui::present(outcome.reply(), prefix, suffix);

    if let Some(speaker) = ctx.speaker(args.speak) {
        speaker.speak(outcome.reply());
    }
    Ok(())
}
