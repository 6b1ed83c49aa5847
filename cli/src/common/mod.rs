//! # Neurolixir Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared collaborators used by the command handlers but independent of the
//! matching logic in `dialogue`:
//!
//! - **`duration`**: `TimeSpan` unit conversions and waiting.
//! - **`fs`**: Reading, appending and rewriting the dialogue source file.
//! - **`network`**: The remote chat client for OpenAI-compatible services.
//! - **`speech`**: Hands reply text to an external text-to-speech program.
//! - **`ui`**: Reply formatting and printing.
//!
pub mod duration;
pub mod fs;
pub mod network;
pub mod speech;
pub mod ui;
