//! Error types for the Sentira library.
//!
//! All fallible operations in Sentira return [`Result`], with [`SentiraError`]
//! describing what went wrong.
//!
//! # Examples
//!
//! ```
//! use sentira::error::{Result, SentiraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiraError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentira operations.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// I/O errors (reading corpus files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer construction, tokenization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-related errors (unreadable or unparsable training data).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A prediction was requested before the model was trained.
    #[error("Model not trained: {0}")]
    ModelNotTrained(String),

    /// Invalid argument (mismatched shapes, negative smoothing, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`SentiraError`].
pub type Result<T> = std::result::Result<T, SentiraError>;

impl SentiraError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiraError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SentiraError::Corpus(msg.into())
    }

    /// Create a new model-not-trained error.
    pub fn model_not_trained<S: Into<String>>(msg: S) -> Self {
        SentiraError::ModelNotTrained(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SentiraError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentiraError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = SentiraError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = SentiraError::model_not_trained("call fit first");
        assert_eq!(error.to_string(), "Model not trained: call fit first");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sentira_error = SentiraError::from(io_error);

        match sentira_error {
            SentiraError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
