//! # Neurolixir Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Neurolixir CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! neurolixir --help
//!
//! # One lookup against a specific dialogue file, with debug logging
//! neurolixir -vv --file ./gpt.txt ask hello
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use neurolixir::commands;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "neurolixir",
    about = "Neurolixir: a small rule-based dialogue responder",
    long_about = "Answers input with the reply of the most similar stored question.\n\
                  Dialogue pairs live in a plain `question=answer` text file.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Dialogue source file (defaults to `dialogue.file` from the configuration).
    #[arg(short, long, env = "NEUROLIXIR_DIALOGUE_FILE", global = true)]
    file: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat interactively with the dialogue store.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single input.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List, add or delete stored dialogue pairs.
    #[command(alias = "d")]
    Dialogue(commands::dialogue::DialogueArgs),
    /// Send a message to a remote chat service.
    Remote(commands::remote::RemoteArgs),
    /// Show a time span in every unit.
    Duration(commands::duration::DurationArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let file = cli.file.as_deref();
    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, file).await,
        Commands::Ask(args) => commands::ask::handle_ask(args, file).await,
        Commands::Dialogue(args) => commands::dialogue::handle_dialogue(args, file).await,
        Commands::Remote(args) => commands::remote::handle_remote(args).await,
        Commands::Duration(args) => commands::duration::handle_duration(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
