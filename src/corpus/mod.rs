//! Labeled training data for sentiment classification.
//!
//! A corpus is an ordered sequence of [`SentimentExample`] records, each a
//! tokenized sentence paired with an integer label. Corpus order matters:
//! vocabulary indices are assigned in first-seen order across examples, so a
//! reordered corpus produces a differently indexed (though equivalent) model.

pub mod reader;

pub use reader::{read_examples, read_examples_json};

use serde::{Deserialize, Serialize};

/// A single labeled training example: tokenized sentence plus integer label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentExample {
    /// Tokens of the sentence, in order.
    pub words: Vec<String>,
    /// Class label (0/1 for binary sentiment, but any integer is accepted).
    pub label: i64,
}

impl SentimentExample {
    /// Create a new example from tokens and a label.
    pub fn new(words: Vec<String>, label: i64) -> Self {
        SentimentExample { words, label }
    }
}

/// A raw labeled sentence, before tokenization.
///
/// This is the on-disk JSON record format accepted by
/// [`read_examples_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSentence {
    /// Sentence text.
    pub text: String,
    /// Class label.
    pub label: i64,
}
