//! # Neurolixir Dialogue Engine (`dialogue`)
//!
//! File: cli/src/dialogue/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The matching core. Input text is compared against every stored question
//! and the answer of the most similar one is returned.
//!
//! - **`similarity`**: Character-sequence similarity score in `[0, 100]`.
//! - **`store`**: `DialogueStore`, the ordered question -> answer mapping and
//!   its line-oriented `question=answer` source file.
//! - **`resolver`**: Best-match selection, fallback replies and dynamic
//!   answers such as the current time.
//!
//! ```rust,ignore
//! let store = DialogueStore::load("gpt.txt")?;
//! let resolver = MatchResolver::new("Please input valid content");
//! println!("{}", resolver.resolve("hello", &store).reply());
//! ```
//!
pub mod resolver;
pub mod similarity;
pub mod store;
