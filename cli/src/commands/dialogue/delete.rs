//! # Neurolixir Dialogue Delete Command
//!
//! File: cli/src/commands/dialogue/delete.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir dialogue delete <QUESTION> [--persist]`. The
//! question must match a stored key exactly (case and whitespace included).
//!
//! With `--persist` the whole dialogue file is regenerated from the remaining
//! pairs: comments, blank lines, duplicates and malformed lines in the file are
//! dropped.
//!
use crate::commands::context::CommandContext;
use crate::core::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

/// Arguments for `neurolixir dialogue delete`.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// The exact stored question to remove.
    question: String,

    /// Rewrite the dialogue source file without the question.
    #[arg(long)]
    persist: bool,
}

pub async fn handle_delete(args: DeleteArgs, file_override: Option<&Path>) -> Result<()> {
    info!("Handling dialogue delete command...");
    let mut ctx = CommandContext::open(file_override)?;

    let removed = ctx.store.delete(&args.question, args.persist)?;
    println!("Deleted \"{}\"", removed);
    if args.persist {
        println!(
            "Rewrote '{}' ({} entries remain).",
            ctx.store.source().display(),
            ctx.store.len()
        );
    } else {
        println!("Not saved (use --persist to rewrite the dialogue file).");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_delete() {
        let args = DeleteArgs::try_parse_from(["delete", "hi", "--persist"]).unwrap();
        assert_eq!(args.question, "hi");
        assert!(args.persist);
    }

    #[test]
    fn test_delete_requires_question() {
        assert!(DeleteArgs::try_parse_from(["delete"]).is_err());
    }
}
