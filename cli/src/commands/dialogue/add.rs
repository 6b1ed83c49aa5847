//! # Neurolixir Dialogue Add Command
//!
//! File: cli/src/commands/dialogue/add.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir dialogue add <QUESTION> <ANSWER> [--persist]`.
//!
//! The answer text `time` is stored as the dynamic clock answer, exactly as
//! it would be when loaded from the backing source. With `--persist` a
//! `question=answer` line is appended to the source; duplicates are not
//! removed, and the later line wins on the next load.
//!
use crate::commands::context::CommandContext;
use crate::core::error::Result;
use crate::dialogue::store::Answer;
use clap::Parser;
use std::path::Path;
use tracing::info;

/// Arguments for `neurolixir dialogue add`.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// The question to store (must not contain '=' or line breaks).
    question: String,

    /// The answer to reply with. `time` stores the live clock answer.
    #[arg(allow_hyphen_values = true)]
    answer: String,

    /// Append the pair to the dialogue source file.
    #[arg(long)]
    persist: bool,
}

pub async fn handle_add(args: AddArgs, file_override: Option<&Path>) -> Result<()> {
    info!("Handling dialogue add command...");
    let mut ctx = CommandContext::open(file_override)?;

    let question = args.question.trim();
    let replaced = ctx.store.contains(question);
    let answer = Answer::parse(args.answer.trim());
    ctx.store.add(question, answer.clone(), args.persist)?;

    let verb = if replaced { "Updated" } else { "Added" };
    println!("{} \"{}\" -> \"{}\"", verb, question, answer);
    if args.persist {
        println!("Saved to '{}'.", ctx.store.source().display());
    } else {
        println!("Not saved (use --persist to write it to the dialogue file).");
    }
    Ok(())
}
