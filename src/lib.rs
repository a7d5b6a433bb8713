//! # Sentira
//!
//! A small, deterministic text sentiment classification library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable, deterministic tokenizers
//! - Insertion-ordered vocabularies and bag-of-words features
//! - Naive Bayes training with Laplace (add-delta) smoothing
//! - Log-space inference with stable softmax probabilities
//!
//! ## Example
//!
//! ```
//! use sentira::classifier::NaiveBayes;
//! use sentira::corpus::SentimentExample;
//! use sentira::vectorize::{BowVectorizer, Vocabulary};
//!
//! let examples = vec![
//!     SentimentExample::new(vec!["good".into(), "movie".into()], 1),
//!     SentimentExample::new(vec!["bad".into(), "movie".into()], 0),
//! ];
//!
//! let vocab = Vocabulary::from_examples(&examples);
//! let vectorizer = BowVectorizer::new();
//! let features = vectorizer.vectorize_all(&examples, &vocab);
//! let labels: Vec<i64> = examples.iter().map(|e| e.label).collect();
//!
//! let mut model = NaiveBayes::new();
//! model.fit(&features, &labels).unwrap();
//!
//! let feature = vectorizer.vectorize(&["good".into(), "movie".into()], &vocab);
//! assert_eq!(model.predict(&feature).unwrap(), 1);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod vectorize;

pub mod prelude {
    //! Convenient re-exports of the most used types.
    pub use crate::analysis::tokenizer::{Tokenizer, default_tokenizer};
    pub use crate::classifier::{Evaluation, NaiveBayes, accuracy, evaluate};
    pub use crate::corpus::{SentimentExample, read_examples};
    pub use crate::error::{Result, SentiraError};
    pub use crate::vectorize::{BowVectorizer, Vocabulary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
