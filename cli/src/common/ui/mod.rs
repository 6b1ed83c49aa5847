//! # Neurolixir Output Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Display side of the output collaborators. A reply is shown as
//! `{prefix}{text}{suffix}` on its own line, e.g. `Neurolixir: hello`.
//!
//! `present` is fire-and-forget: a failed write to stdout (closed pipe) is
//! logged and otherwise ignored. `present_to` is the same thing for any
//! writer and reports the error, which the interactive loop uses to stop.
//!
use std::io::{self, Write};
use tracing::warn;

/// Builds the displayed form of a reply.
pub fn format_reply(text: &str, prefix: &str, suffix: &str) -> String {
    format!("{}{}{}", prefix, text, suffix)
}

/// Writes one reply line to `out` and flushes it.
pub fn present_to<W: Write>(out: &mut W, text: &str, prefix: &str, suffix: &str) -> io::Result<()> {
    writeln!(out, "{}", format_reply(text, prefix, suffix))?;
    out.flush()
}

/// Prints one reply line to stdout.
pub fn present(text: &str, prefix: &str, suffix: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = present_to(&mut handle, text, prefix, suffix) {
        warn!("Failed to write reply to stdout: {}", e);
    }
}
