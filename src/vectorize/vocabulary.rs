//! Insertion-ordered vocabulary over a training corpus.

use ahash::AHashMap;

use crate::corpus::SentimentExample;

/// A vocabulary mapping tokens to dense indices in `[0, len)`.
///
/// Indices are assigned in first-seen order: examples are scanned in corpus
/// order and tokens within each example in sentence order, so a deterministic
/// corpus yields a deterministic vocabulary. The reverse `terms` list keeps
/// index-to-token lookup cheap and makes the dense-range invariant structural.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Token -> index lookup.
    index: AHashMap<String, usize>,
    /// Tokens in index order.
    terms: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            index: AHashMap::new(),
            terms: Vec::new(),
        }
    }

    /// Build a vocabulary from training examples, in first-seen token order.
    pub fn from_examples(examples: &[SentimentExample]) -> Self {
        let mut vocab = Vocabulary::new();

        for example in examples {
            for word in &example.words {
                vocab.add_token(word);
            }
        }

        vocab
    }

    /// Add a token, returning its index.
    ///
    /// A token already present keeps its original index.
    pub fn add_token(&mut self, token: &str) -> usize {
        if let Some(&idx) = self.index.get(token) {
            return idx;
        }

        let idx = self.terms.len();
        self.index.insert(token.to_string(), idx);
        self.terms.push(token.to_string());
        idx
    }

    /// Look up the index of a token.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Look up the token at an index.
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(|s| s.as_str())
    }

    /// Check whether a token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over tokens in index order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(words: &[&str], label: i64) -> SentimentExample {
        SentimentExample::new(words.iter().map(|w| w.to_string()).collect(), label)
    }

    #[test]
    fn test_vocabulary_first_seen_order() {
        let examples = vec![
            example(&["good", "movie"], 1),
            example(&["bad", "movie"], 0),
        ];

        let vocab = Vocabulary::from_examples(&examples);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("good"), Some(0));
        assert_eq!(vocab.get("movie"), Some(1));
        assert_eq!(vocab.get("bad"), Some(2));
    }

    #[test]
    fn test_vocabulary_indices_are_dense() {
        let examples = vec![
            example(&["a", "b", "a", "c", "b"], 0),
            example(&["c", "d"], 1),
        ];

        let vocab = Vocabulary::from_examples(&examples);

        assert_eq!(vocab.len(), 4);
        let mut indices: Vec<usize> = vocab.terms().map(|t| vocab.get(t).unwrap()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_vocabulary_term_lookup() {
        let examples = vec![example(&["hello", "world"], 1)];
        let vocab = Vocabulary::from_examples(&examples);

        assert_eq!(vocab.term(0), Some("hello"));
        assert_eq!(vocab.term(1), Some("world"));
        assert_eq!(vocab.term(2), None);
    }

    #[test]
    fn test_vocabulary_duplicate_add_keeps_index() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.add_token("word"), 0);
        assert_eq!(vocab.add_token("other"), 1);
        assert_eq!(vocab.add_token("word"), 0);
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::from_examples(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        assert!(!vocab.contains("anything"));
    }
}
