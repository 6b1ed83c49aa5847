//! # Neurolixir Library Root
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Exposes the dialogue engine and its collaborators so the binary, the
//! integration tests and other crates share one implementation.
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod dialogue;
