//! Regex-based tokenizer implementation.

use regex::Regex;

use super::Tokenizer;
use crate::error::{Result, SentiraError};

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// This is the default tokenizer for the sentiment pipeline. The default
/// pattern `\w+` matches sequences of word characters, dropping punctuation.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Regex,
    /// Whether to lowercase tokens before returning them
    lowercase: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SentiraError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: regex,
            lowercase: false,
        })
    }

    /// Enable or disable lowercasing of extracted tokens.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer lowercases tokens.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self
            .pattern
            .find_iter(text)
            .map(|m| {
                if self.lowercase {
                    m.as_str().to_lowercase()
                } else {
                    m.as_str().to_string()
                }
            })
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer_default_pattern() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("Hello, world! It's fine.").unwrap();

        assert_eq!(tokens, vec!["Hello", "world", "It", "s", "fine"]);
    }

    #[test]
    fn test_regex_tokenizer_lowercase() {
        let tokenizer = RegexTokenizer::new().unwrap().with_lowercase(true);
        let tokens = tokenizer.tokenize("Good Movie!").unwrap();

        assert_eq!(tokens, vec!["good", "movie"]);
    }

    #[test]
    fn test_regex_tokenizer_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
        let tokens = tokenizer.tokenize("abc123def").unwrap();

        assert_eq!(tokens, vec!["abc", "def"]);
    }

    #[test]
    fn test_regex_tokenizer_invalid_pattern() {
        let result = RegexTokenizer::with_pattern(r"(unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
