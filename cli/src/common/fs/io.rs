//! # Neurolixir Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the file input/output used by the dialogue store's
//! backing source. It wraps `std::fs` with consistent error handling:
//!
//! - **`read_source`**: Reads a whole UTF-8 file, distinguishing a file that
//!   cannot be opened (`NeurolixirError::SourceUnavailable`) from one that was
//!   opened but could not be read (`NeurolixirError::SourceRead`).
//! - **`append_to_file`**: Appends text to the end of an existing file.
//! - **`write_string_to_file`**: Truncates and rewrites a file, creating the
//!   parent directory first if needed.
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path is a file.
//!
//! None of these writes are atomic. A crash during a rewrite can leave a
//! truncated file behind.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use neurolixir::common::fs::io;
//!
//! let text = io::read_source(Path::new("gpt.txt"))?;
//! io::append_to_file(Path::new("gpt.txt"), "\nhi=hello")?;
//! io::write_string_to_file(Path::new("gpt.txt"), "hi=hello\n")?;
//! ```
//!
use crate::core::error::{NeurolixirError, Result};
use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents. Fails with
/// `NeurolixirError::Config` if the path exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(NeurolixirError::Config(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a dialogue source file into a string.
///
/// # Errors
///
/// - `SourceUnavailable` if the file cannot be opened (missing, permissions, directory).
/// - `SourceRead` if reading fails after opening, including invalid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| NeurolixirError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| NeurolixirError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Appends `content` to the end of the file at `path`, creating it if missing.
pub fn append_to_file(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Writes string content to a file path, replacing any existing content.
///
/// The parent directory is created first when it does not exist.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
