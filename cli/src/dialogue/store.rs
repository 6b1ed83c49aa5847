//! # Neurolixir Dialogue Store
//!
//! File: cli/src/dialogue/store.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `DialogueStore` owns every question -> answer pair for the lifetime of
//! the process. It is loaded once from a line-oriented backing source and then
//! mutated through `add` and `delete`, each of which can optionally persist the
//! change back to that source.
//!
//! ## Backing Source Format
//!
//! UTF-8 text, one pair per line:
//!
//! ```text
//! hi=hello
//! What's your name? = Neurolixir
//! what time is it=time
//! ```
//!
//! - The first `=` splits question from answer; both sides are trimmed.
//! - Lines without `=`, or with nothing before it, are skipped silently.
//! - A repeated question keeps its first position and takes the last answer.
//! - The answer text `time` is the live clock sentinel and loads as
//!   `Answer::Dynamic(DynamicKind::Clock)`.
//!
//! ## Persistence
//!
//! - `add(.., persist = true)` appends `"\n{question}={answer}"` to the source.
//! - `delete(.., persist = true)` rewrites the whole source from memory as
//!   `"{question}={answer}\n"` lines, dropping comments, malformed lines and
//!   duplicates that were in the original file.
//!
use crate::common::fs::io;
use crate::core::error::{NeurolixirError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Answers computed at resolve time instead of being stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicKind {
    /// The current local wall-clock time.
    Clock,
}

impl DynamicKind {
    /// Every dynamic kind, for sentinel lookup.
    pub const ALL: [DynamicKind; 1] = [DynamicKind::Clock];

    /// The reserved answer text that stands for this kind in the backing source.
    pub fn sentinel(self) -> &'static str {
        match self {
            DynamicKind::Clock => "time",
        }
    }

    /// Maps backing-source answer text to a dynamic kind, if it is a sentinel.
    pub fn from_sentinel(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.sentinel() == text)
    }
}

/// A stored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Literal(String),
    Dynamic(DynamicKind),
}

impl Answer {
    /// Interprets answer text the way the backing source does: sentinel text
    /// becomes `Dynamic`, everything else is `Literal`.
    pub fn parse(text: &str) -> Self {
        match DynamicKind::from_sentinel(text) {
            Some(kind) => Answer::Dynamic(kind),
            None => Answer::Literal(text.to_string()),
        }
    }

    /// The text written to the backing source for this answer.
    pub fn source_text(&self) -> &str {
        match self {
            Answer::Literal(text) => text,
            Answer::Dynamic(kind) => kind.sentinel(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_text())
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::parse(text)
    }
}

/// In-memory question -> answer mapping tied to its backing source.
#[derive(Debug, Clone)]
pub struct DialogueStore {
    source: PathBuf,
    entries: IndexMap<String, Answer>,
}

impl DialogueStore {
    /// Loads the store from the backing source at `path`.
    ///
    /// # Errors
    ///
    /// - `NeurolixirError::SourceUnavailable` if the file cannot be opened.
    /// - `NeurolixirError::SourceRead` if it cannot be read as UTF-8 text.
    ///
    /// There is no fallback to an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = io::read_source(path)?;
        let store = Self::from_source_text(path, &text);
        info!(
            "Loaded {} dialogue pair(s) from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Builds a store from already-read source text, bound to `source` for persistence.
    pub fn from_source_text(source: impl Into<PathBuf>, text: &str) -> Self {
        let mut entries = IndexMap::new();
        for (line_no, line) in text.split('\n').enumerate() {
            match parse_line(line) {
                Some((question, answer)) => {
                    entries.insert(question.to_string(), Answer::parse(answer));
                }
                None if line.trim().is_empty() => {}
                None => debug!("Skipping malformed dialogue line {}: {:?}", line_no + 1, line),
            }
        }
        Self {
            source: source.into(),
            entries,
        }
    }

    /// The backing source this store loads from and persists to.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The live mapping, in load/insertion order.
    pub fn get_all(&self) -> &IndexMap<String, Answer> {
        &self.entries
    }

    /// Exact, case- and whitespace-sensitive lookup.
    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.entries.get(question)
    }

    pub fn contains(&self, question: &str) -> bool {
        self.entries.contains_key(question)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored questions in mapping order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Stored answers in mapping order.
    pub fn values(&self) -> Vec<&Answer> {
        self.entries.values().collect()
    }

    /// (question, answer) pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries.iter().map(|(q, a)| (q.as_str(), a))
    }

    /// Inserts or overwrites `question` in memory; with `persist`, appends a
    /// `question=answer` line to the backing source.
    ///
    /// Appending never deduplicates: a reload may see the question twice, and
    /// the later line wins.
    ///
    /// # Errors
    ///
    /// `NeurolixirError::InvalidDialogue` when the pair could not be written as
    /// one source line (empty question, `=` in the question, or a line break in
    /// either side), or for a `Literal` answer spelled like a sentinel, which
    /// would reload as `Dynamic`. The store is left unchanged in that case.
    pub fn add(&mut self, question: &str, answer: Answer, persist: bool) -> Result<()> {
        // Same trimming as load, so a persisted pair reloads unchanged.
        let question = question.trim();
        let answer = match answer {
            Answer::Literal(text) => Answer::Literal(text.trim().to_string()),
            dynamic => dynamic,
        };
        validate_entry(question, &answer)?;

        if let Answer::Dynamic(kind) = &answer {
            debug!("Adding dynamic {:?} answer for {:?}", kind, question);
        }
        let line = format!("\n{}={}", question, answer);
        self.entries.insert(question.to_string(), answer);
        info!("Added dialogue pair for question {:?}", question);

        if persist {
            io::append_to_file(&self.source, &line)?;
            info!("Appended dialogue pair to {}", self.source.display());
        }
        Ok(())
    }

    /// Removes `question`; with `persist`, rewrites the whole backing source
    /// from the remaining pairs.
    ///
    /// Returns the removed question.
    ///
    /// # Errors
    ///
    /// `NeurolixirError::QuestionNotFound` if the question is absent. Nothing is
    /// removed or written in that case.
    pub fn delete(&mut self, question: &str, persist: bool) -> Result<String> {
        if self.entries.shift_remove(question).is_none() {
            anyhow::bail!(NeurolixirError::QuestionNotFound {
                question: question.to_string(),
            });
        }
        info!("Deleted dialogue pair for question {:?}", question);

        if persist {
            io::write_string_to_file(&self.source, &self.render())?;
            warn!(
                "Rewrote {} from memory; formatting in the original file is not kept",
                self.source.display()
            );
        }
        Ok(question.to_string())
    }

    /// The full backing-source text for the current mapping.
    fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(question, answer)| format!("{}={}\n", question, answer))
            .collect()
    }
}

/// Splits one source line into (question, answer), or `None` if it is malformed.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (question, answer) = line.trim().split_once('=')?;
    let question = question.trim();
    if question.is_empty() {
        return None;
    }
    Some((question, answer.trim()))
}

fn validate_entry(question: &str, answer: &Answer) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!(NeurolixirError::InvalidDialogue(
            "question must not be empty".to_string()
        ));
    }
    if question.contains('=') {
        anyhow::bail!(NeurolixirError::InvalidDialogue(format!(
            "question {:?} must not contain '='",
            question
        )));
    }
    if question.contains(['\n', '\r']) || answer.source_text().contains(['\n', '\r']) {
        anyhow::bail!(NeurolixirError::InvalidDialogue(format!(
            "pair for {:?} must fit on a single line",
            question
        )));
    }
    if let Answer::Literal(text) = answer {
        if let Some(kind) = DynamicKind::from_sentinel(text) {
            anyhow::bail!(NeurolixirError::InvalidDialogue(format!(
                "literal answer {:?} is reserved for the dynamic {:?} answer",
                text, kind
            )));
        }
    }
    Ok(())
}
