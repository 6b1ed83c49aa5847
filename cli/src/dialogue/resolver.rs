//! # Neurolixir Match Resolver
//!
//! File: cli/src/dialogue/resolver.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns free-text input into a reply: every stored question is scored against
//! the input with `similarity::score`, the best one wins, and its answer is
//! returned. Dynamic answers (the live clock) are produced at this point rather
//! than read from the store.
//!
//! ## Matching Rules
//!
//! - Scores are compared with strict `>` starting from 0, so on a tie the
//!   question met first in store order wins.
//! - There is no similarity floor. Any positive best score is a match, however
//!   low; callers that want a higher bar should check `Outcome::score`.
//! - An empty store, or one where every question scores 0, yields the
//!   caller's fallback message with `used_fallback` set.
//!
//! The resolver never prints or speaks; presenting the `Outcome` is up to the caller.
//!
use crate::dialogue::similarity;
use crate::dialogue::store::{Answer, DialogueStore, DynamicKind};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Produces the text of a dynamic answer on demand.
pub type Producer = Box<dyn Fn() -> String + Send + Sync>;

/// Current local time in the classic ctime layout, e.g. `Mon Oct  6 14:03:09 2025`.
pub fn clock_now() -> String {
    chrono::Local::now()
        .format("%a %b %e %H:%M:%S %Y")
        .to_string()
}

/// Registry of producers for dynamic answers.
pub struct DynamicAnswers {
    producers: HashMap<DynamicKind, Producer>,
}

impl DynamicAnswers {
    /// A registry with no producers; dynamic answers resolve to their sentinel text.
    pub fn empty() -> Self {
        Self {
            producers: HashMap::new(),
        }
    }

    /// Registers (or replaces) the producer for `kind`.
    pub fn with<F>(mut self, kind: DynamicKind, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.producers.insert(kind, Box::new(producer));
        self
    }

    pub fn produce(&self, kind: DynamicKind) -> Option<String> {
        self.producers.get(&kind).map(|producer| producer())
    }
}

impl Default for DynamicAnswers {
    fn default() -> Self {
        Self::empty().with(DynamicKind::Clock, clock_now)
    }
}

impl fmt::Debug for DynamicAnswers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicAnswers")
            .field("kinds", &self.producers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Result of resolving one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The winning stored question, `None` when the fallback was used.
    pub matched_question: Option<String>,
    /// The reply text: the matched answer, or the fallback message.
    pub answer: Option<String>,
    pub used_fallback: bool,
    /// Similarity of the winning question in `[0, 100]`; 0 for the fallback.
    pub score: f64,
}

impl Outcome {
    fn no_match(fallback: &str) -> Self {
        Self {
            matched_question: None,
            answer: Some(fallback.to_string()),
            used_fallback: true,
            score: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        !self.used_fallback
    }

    /// The text to present for this outcome.
    pub fn reply(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }
}

/// Resolves `input` against `store`.
///
/// See the module docs for the matching rules.
pub fn resolve(
    input: &str,
    store: &DialogueStore,
    dynamic_answers: &DynamicAnswers,
    fallback: &str,
) -> Outcome {
    let Some((question, score)) = best_match(input, store) else {
        debug!("No match for input {:?}; using fallback", input);
        return Outcome::no_match(fallback);
    };

    let answer = match store.get(question) {
        Some(Answer::Literal(text)) => text.clone(),
        Some(Answer::Dynamic(kind)) => dynamic_answers.produce(*kind).unwrap_or_else(|| {
            warn!("No producer registered for {:?}; returning sentinel text", kind);
            kind.sentinel().to_string()
        }),
        // best_match only yields keys of `store`.
        None => return Outcome::no_match(fallback),
    };

    debug!(
        "Input {:?} matched question {:?} (score {:.2})",
        input, question, score
    );
    Outcome {
        matched_question: Some(question.to_string()),
        answer: Some(answer),
        used_fallback: false,
        score,
    }
}

/// The highest-scoring question, first one wins on ties. `None` if no question scores above 0.
pub fn best_match<'s>(input: &str, store: &'s DialogueStore) -> Option<(&'s str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    let mut max_score = 0.0;
    for question in store.keys() {
        let score = similarity::score(input, question);
        if score > max_score {
            max_score = score;
            best = Some((question, score));
        }
    }
    best
}

/// Resolver bound to a set of dynamic producers and a fallback message.
#[derive(Debug)]
pub struct MatchResolver {
    dynamic_answers: DynamicAnswers,
    fallback: String,
}

impl MatchResolver {
    /// A resolver with the default producers (live clock).
    pub fn new(fallback: impl Into<String>) -> Self {
        Self::with_dynamic_answers(DynamicAnswers::default(), fallback)
    }

    pub fn with_dynamic_answers(dynamic_answers: DynamicAnswers, fallback: impl Into<String>) -> Self {
        Self {
            dynamic_answers,
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn resolve(&self, input: &str, store: &DialogueStore) -> Outcome {
        resolve(input, store, &self.dynamic_answers, &self.fallback)
    }

    /// Whether `input` would match some stored question.
    pub fn has_match(&self, input: &str, store: &DialogueStore) -> bool {
        best_match(input, store).is_some()
    }
}
