//! Bag-of-words feature extraction.

use super::Vocabulary;
use crate::corpus::SentimentExample;

/// Bag-of-words vectorizer.
///
/// Maps a token sequence onto a fixed-length vector indexed by vocabulary
/// position. In count mode (the default) each slot holds the number of
/// occurrences of that vocabulary word; in binary mode it holds a 0/1
/// presence flag. Out-of-vocabulary tokens contribute nothing: vectorization
/// never fails and never extends the vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct BowVectorizer {
    /// Binary (presence) mode instead of count mode.
    binary: bool,
}

impl BowVectorizer {
    /// Create a count-mode vectorizer.
    pub fn new() -> Self {
        BowVectorizer { binary: false }
    }

    /// Set binary (presence/absence) mode.
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Check whether this vectorizer is in binary mode.
    pub fn binary(&self) -> bool {
        self.binary
    }

    /// Vectorize a token sequence against a vocabulary.
    ///
    /// An empty vocabulary yields an empty vector.
    pub fn vectorize(&self, tokens: &[String], vocab: &Vocabulary) -> Vec<f64> {
        let mut bow = vec![0.0; vocab.len()];

        for token in tokens {
            if let Some(idx) = vocab.get(token) {
                if self.binary {
                    bow[idx] = 1.0;
                } else {
                    bow[idx] += 1.0;
                }
            }
        }

        bow
    }

    /// Vectorize every example into a feature matrix, in example order.
    pub fn vectorize_all(
        &self,
        examples: &[SentimentExample],
        vocab: &Vocabulary,
    ) -> Vec<Vec<f64>> {
        examples
            .iter()
            .map(|example| self.vectorize(&example.words, vocab))
            .collect()
    }
}
