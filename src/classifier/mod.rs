//! Naive Bayes sentiment classification.
//!
//! This module provides the training and inference engine of the pipeline:
//! [`NaiveBayes`] estimates class priors and add-delta smoothed per-word
//! conditional probabilities from a bag-of-words feature matrix, then predicts
//! labels or probability distributions in log space. [`metrics`] carries the
//! evaluation helpers used against held-out data.

pub mod metrics;
pub mod naive_bayes;

pub use metrics::{Evaluation, accuracy, evaluate};
pub use naive_bayes::NaiveBayes;

use serde::{Deserialize, Serialize};

/// Metadata recorded when a model is trained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Vocabulary size at fit time (feature vector length).
    pub vocab_size: usize,
    /// Number of distinct classes observed.
    pub num_classes: usize,
    /// Smoothing strength used.
    pub smoothing: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_metadata_serializes() {
        let metadata = ModelMetadata {
            trained_at: chrono::Utc::now(),
            training_examples: 4,
            vocab_size: 10,
            num_classes: 2,
            smoothing: 1.0,
        };

        let json = serde_json::to_string(&metadata).unwrap();
        let parsed: ModelMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.training_examples, 4);
        assert_eq!(parsed.vocab_size, 10);
        assert_eq!(parsed.num_classes, 2);
    }
}
