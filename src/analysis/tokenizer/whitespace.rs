//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// No case folding or punctuation stripping is performed; "Good" and "good"
/// remain distinct tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(|word| word.to_string()).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
