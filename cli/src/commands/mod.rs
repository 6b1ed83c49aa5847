//! # Neurolixir Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! All top-level commands of the `neurolixir` CLI. Each module defines an
//! `XArgs` struct parsed by Clap and an async `handle_x` function called
//! from `main.rs`.
//!
//! ## Commands
//!
//! - `ask`: Resolve one input against the dialogue store
//! - `chat`: Interactive dialogue loop
//! - `dialogue`: List, add and delete stored pairs (`list`, `add`, `delete`)
//! - `duration`: Time span conversions
//! - `remote`: Forward a message to an OpenAI-compatible chat service
//!
//! `context` holds the per-invocation configuration, store and resolver
//! shared by the dialogue-backed commands.
//!

/// Single lookup: `neurolixir ask <TEXT>...`.
pub mod ask;
/// Interactive loop: `neurolixir chat`.
pub mod chat;
/// Configuration + dialogue store loading shared by commands.
pub mod context;
/// Command group for editing the store. Includes subcommands `list`, `add`, `delete`.
pub mod dialogue;
/// Time span breakdown: `neurolixir duration <AMOUNT> <UNIT>`.
pub mod duration;
/// Remote chat: `neurolixir remote <MESSAGE>...`.
pub mod remote;
