//! # Neurolixir Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir chat`, the interactive loop. Each line read from
//! stdin is resolved against the dialogue store and the reply is printed as
//! `Neurolixir: <answer>` (and spoken with `--speak`).
//!
//! The session ends on an exit keyword (`exit`, `quit`, `bye`, `退出`, `离开`,
//! `再见`, case-insensitive), on end of input, or on Ctrl+C. All three print
//! the same goodbye line.
//!
//! ## Examples
//!
//! ```bash
//! neurolixir chat
//! neurolixir chat --lang zh --speak
//! ```
//!
//! ```text
//! Start chatting! Type "exit" or "quit" to leave.
//! You: hello
//! Neurolixir: Hi there!
//! You: exit
//! Neurolixir: Chat ended by user.
//! ```
//!
use crate::commands::context::CommandContext;
use crate::common::speech::Speaker;
use crate::common::ui;
use crate::core::error::Result;
use crate::dialogue::resolver::MatchResolver;
use crate::dialogue::store::DialogueStore;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Prefix of every reply line.
pub const REPLY_PREFIX: &str = "Neurolixir: ";
/// Printed (and spoken) whenever a session ends.
pub const FAREWELL: &str = "Chat ended by user.";

const EXIT_WORDS: [&str; 6] = ["exit", "quit", "bye", "退出", "离开", "再见"];

/// Arguments for `neurolixir chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Speak each reply through the configured text-to-speech command.
    #[arg(long)]
    speak: bool,

    /// Language of the banner and prompt.
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,
}

/// Prompt language.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Zh,
}

impl Lang {
    pub fn banner(self) -> &'static str {
        match self {
            Lang::En => "Start chatting! Type \"exit\" or \"quit\" to leave.",
            Lang::Zh => "开始聊天吧!输入\"exit\"或\"quit\"退出",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Lang::En => "You: ",
            Lang::Zh => "你: ",
        }
    }
}

/// Whether `line` asks to leave the chat.
pub fn is_exit_word(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    EXIT_WORDS.contains(&lowered.as_str())
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    ExitWord,
    EndOfInput,
}

/// One interactive conversation over a store.
#[derive(Debug)]
pub struct ChatSession {
    store: DialogueStore,
    resolver: MatchResolver,
    lang: Lang,
    speaker: Option<Speaker>,
}

impl ChatSession {
    pub fn new(
        store: DialogueStore,
        resolver: MatchResolver,
        lang: Lang,
        speaker: Option<Speaker>,
    ) -> Self {
        Self {
            store,
            resolver,
            lang,
            speaker,
        }
    }

    /// Runs the read-resolve-print loop until an exit word or end of input,
    /// then prints the goodbye line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<SessionEnd> {
        writeln!(out, "{}", self.lang.banner())?;
        let mut line = String::new();
        let end = loop {
            write!(out, "{}", self.lang.prompt())?;
            out.flush()?;

            line.clear();
            if input
                .read_line(&mut line)
                .context("Failed to read chat input")?
                == 0
            {
                writeln!(out)?;
                break SessionEnd::EndOfInput;
            }
            let text = line.trim_end_matches(['\n', '\r']);
            if is_exit_word(text) {
                break SessionEnd::ExitWord;
            }

            let outcome = self.resolver.resolve(text, &self.store);
            debug!(
                "Chat input {:?} -> {:?} (score {:.2})",
                text, outcome.matched_question, outcome.score
            );
            self.reply(out, outcome.reply())?;
        };
        self.farewell(out)?;
        info!("Chat session ended ({:?})", end);
        Ok(end)
    }

    /// Prints and speaks the goodbye line.
    pub fn farewell<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.reply(out, FAREWELL)
    }

    fn reply<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        ui::present_to(out, text, REPLY_PREFIX, "")?;
        if let Some(speaker) = &self.speaker {
            speaker.speak(text);
        }
        Ok(())
    }
}

/// Ends the current prompt line and prints (and speaks) the goodbye after Ctrl+C.
fn interrupted_farewell<W: Write>(out: &mut W, speaker: Option<&Speaker>) -> io::Result<()> {
    writeln!(out)?;
    ui::present_to(out, FAREWELL, REPLY_PREFIX, "")?;
    out.flush()?;
    if let Some(speaker) = speaker {
        speaker.speak(FAREWELL);
    }
    Ok(())
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads the dialogue store and runs a `ChatSession` on stdin/stdout. The
/// loop itself is blocking, so it runs on a blocking thread while this task
/// waits for either the session to finish or Ctrl+C.
pub async fn handle_chat(args: ChatArgs, file_override: Option<&Path>) -> Result<()> {
    info!("Handling chat command...");
    let ctx = CommandContext::open(file_override)?;
    let speaker = ctx.speaker(args.speak);
    let session = ChatSession::new(ctx.store, ctx.resolver, args.lang, speaker.clone());

    let session_task = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        session.run(stdin.lock(), &mut stdout)
    });

    tokio::select! {
        joined = session_task => {
            joined.context("Chat session task failed")??;
            Ok(())
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            info!("Received Ctrl+C, ending chat session...");
            interrupted_farewell(&mut io::stdout(), speaker.as_ref())?;
            // The blocking reader is still parked on stdin and would keep the runtime alive.
            debug!("Exiting process directly: the stdin reader thread cannot be cancelled");
            std::process::exit(0)
        }
    }
}
