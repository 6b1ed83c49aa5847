//! # Neurolixir Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! File access for the dialogue source. Failures are mapped to
//! `NeurolixirError::SourceUnavailable` / `SourceRead` so callers can tell a
//! missing file from a broken one.
//!
pub mod io;
