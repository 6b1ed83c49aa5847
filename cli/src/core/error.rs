//! # Neurolixir Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Neurolixir. Domain
//! failures are variants of `NeurolixirError`; everything else travels as an
//! `anyhow::Error` with context attached.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `NeurolixirError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - The dialogue backing source (missing, unreadable)
//! - Dialogue mutations (unknown question, unrepresentable entry)
//! - The remote chat boundary
//! - Configuration
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Raise a specific error kind
//! anyhow::bail!(NeurolixirError::QuestionNotFound { question: q.to_string() });
//!
//! // Branch on the kind at the call site
//! match store.delete("foo", false) {
//!     Ok(_) => {}
//!     Err(e) if e.downcast_ref::<NeurolixirError>().is_some_and(|ne| {
//!         matches!(ne, NeurolixirError::QuestionNotFound { .. })
//!     }) => println!("nothing to delete"),
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Neurolixir application.
// No PartialEq: the io::Error sources don't implement it.
#[derive(Error, Debug)]
pub enum NeurolixirError {
    #[error("Dialogue source '{}' could not be opened: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read dialogue source '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Question \"{question}\" not found in dialogue store.")]
    QuestionNotFound { question: String },

    #[error("Invalid dialogue entry: {0}")]
    InvalidDialogue(String),

    #[error("Remote chat request failed: {0}")]
    RemoteChat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Returns the `NeurolixirError` carried by `err`, if any.
pub fn kind_of(err: &anyhow::Error) -> Option<&NeurolixirError> {
    err.downcast_ref::<NeurolixirError>()
}
