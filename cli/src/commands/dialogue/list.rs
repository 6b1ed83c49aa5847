//! # Neurolixir Dialogue List Command
//!
//! File: cli/src/commands/dialogue/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir dialogue list`. Prints the store in mapping order,
//! one entry per line:
//!
//! ```text
//! hi=hello
//! what time is it=time
//! ```
//!
//! `--questions` prints only questions and `--answers` only answers (dynamic
//! answers show their source text, e.g. `time`). An empty store prints a note
//! instead.
//!
use crate::commands::context::CommandContext;
use crate::core::error::Result;
use crate::dialogue::store::DialogueStore;
use clap::Parser;
use std::path::Path;
use tracing::info;

/// Arguments for `neurolixir dialogue list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print only the stored questions.
    #[arg(long, conflicts_with = "answers")]
    questions: bool,

    /// Print only the stored answers.
    #[arg(long)]
    answers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMode {
    Pairs,
    Questions,
    Answers,
}

impl ListArgs {
    fn mode(&self) -> ListMode {
        if self.questions {
            ListMode::Questions
        } else if self.answers {
            ListMode::Answers
        } else {
            ListMode::Pairs
        }
    }
}

pub async fn handle_list(args: ListArgs, file_override: Option<&Path>) -> Result<()> {
    info!("Handling dialogue list command...");
    let ctx = CommandContext::open(file_override)?;

    if ctx.store.is_empty() {
        println!(
            "No dialogue entries found in '{}'.",
            ctx.store.source().display()
        );
        return Ok(());
    }
    for line in listing(&ctx.store, args.mode()) {
        println!("{}", line);
    }
    Ok(())
}

fn listing(store: &DialogueStore, mode: ListMode) -> Vec<String> {
    match mode {
        ListMode::Pairs => store
            .iter()
            .map(|(question, answer)| format!("{}={}", question, answer))
            .collect(),
        ListMode::Questions => store.keys().into_iter().map(str::to_string).collect(),
        ListMode::Answers => store.values().into_iter().map(|a| a.to_string()).collect(),
    }
}
