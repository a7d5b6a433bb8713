//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and filters out
//! non-word segments like punctuation and whitespace, so international text
//! tokenizes sensibly.

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Only segments containing at least one alphanumeric character are kept.
///
/// # Examples
///
/// ```
/// use sentira::analysis::tokenizer::Tokenizer;
/// use sentira::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens = tokenizer.tokenize("café, résumé!").unwrap();
/// assert_eq!(tokens, vec!["café", "résumé"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer {
    /// Whether to lowercase tokens before returning them
    lowercase: bool,
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer { lowercase: false }
    }

    /// Enable or disable lowercasing of extracted tokens.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .unicode_words()
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
