//! # Neurolixir Dialogue Command Group
//!
//! File: cli/src/commands/dialogue/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point and router for `neurolixir dialogue`, which inspects and
//! edits the dialogue store:
//!
//! - `list`: print stored pairs, questions or answers
//! - `add`: insert or overwrite a pair
//! - `delete`: remove a pair
//!
//! Edits only touch the backing source with `--persist`; without it they
//! apply to this invocation's in-memory store and are reported as such.
//!
//! ## Examples
//!
//! ```bash
//! neurolixir dialogue list --questions
//! neurolixir dialogue add "what time is it" time --persist
//! neurolixir dialogue delete "what time is it" --persist
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Handler and arguments for `neurolixir dialogue add`.
mod add;
/// Handler and arguments for `neurolixir dialogue delete`.
mod delete;
/// Handler and arguments for `neurolixir dialogue list`.
mod list;

/// Arguments for the `neurolixir dialogue` command group.
#[derive(Parser, Debug)]
pub struct DialogueArgs {
    #[command(subcommand)]
    command: DialogueCommand,
}

#[derive(Subcommand, Debug)]
enum DialogueCommand {
    /// List stored question=answer pairs.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Add or overwrite a question=answer pair.
    Add(add::AddArgs),
    /// Delete a stored question.
    #[command(alias = "rm")]
    Delete(delete::DeleteArgs),
}

/// Routes `neurolixir dialogue <subcommand>` to its handler.
pub async fn handle_dialogue(args: DialogueArgs, file_override: Option<&Path>) -> Result<()> {
    match args.command {
        DialogueCommand::List(args) => list::handle_list(args, file_override).await?,
        DialogueCommand::Add(args) => add::handle_add(args, file_override).await?,
        DialogueCommand::Delete(args) => delete::handle_delete(args, file_override).await?,
    }
    Ok(())
}
