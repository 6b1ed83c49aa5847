//! # Neurolixir Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Network-facing collaborators. Currently this is the remote chat client
//! used by `neurolixir remote`, which forwards a message to an
//! OpenAI-compatible service instead of the local dialogue store.
//!
//! - **`chat`**: `ChatClient`, `ChatEndpoint` presets and `ChatRequest`.
//!

/// OpenAI-compatible chat completion client.
pub mod chat;
