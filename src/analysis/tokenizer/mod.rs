//! Tokenizer implementations for text analysis.

use crate::error::Result;

/// Trait for tokenizers that convert text into token strings.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a sequence of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Create the default tokenizer used by the training pipeline.
///
/// Lowercases and extracts `\w+` word sequences, so "Good movie!" becomes
/// `["good", "movie"]`.
pub fn default_tokenizer() -> Result<RegexTokenizer> {
    Ok(RegexTokenizer::new()?.with_lowercase(true))
}
