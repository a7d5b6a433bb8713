//! Evaluation metrics for trained classifiers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::NaiveBayes;
use crate::error::{Result, SentiraError};

/// Evaluation results over a labeled feature matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Total examples evaluated.
    pub total: usize,
    /// Correctly classified examples.
    pub correct: usize,
    /// Fraction of correct predictions.
    pub accuracy: f64,
    /// Per-class (total, correct) counts, keyed by label.
    pub per_class: BTreeMap<i64, ClassCounts>,
}

/// Per-class evaluation counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassCounts {
    /// Examples carrying this label.
    pub total: usize,
    /// Examples of this label classified correctly.
    pub correct: usize,
}

/// Fraction of positions where predictions and labels agree.
///
/// Returns 0.0 for empty input.
pub fn accuracy(predictions: &[i64], labels: &[i64]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }

    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, l)| p == l)
        .count();
    correct as f64 / predictions.len() as f64
}

/// Evaluate a trained model against a labeled feature matrix.
///
/// Fails if the model is untrained, if the matrix and labels differ in
/// length, or if any feature vector has the wrong length.
pub fn evaluate(model: &NaiveBayes, features: &[Vec<f64>], labels: &[i64]) -> Result<Evaluation> {
    if features.len() != labels.len() {
        return Err(SentiraError::invalid_argument(format!(
            "features/labels length mismatch: {} features, {} labels",
            features.len(),
            labels.len()
        )));
    }

    let mut correct = 0;
    let mut per_class: BTreeMap<i64, ClassCounts> = BTreeMap::new();

    for (feature, &label) in features.iter().zip(labels) {
        let predicted = model.predict(feature)?;
        let counts = per_class.entry(label).or_default();
        counts.total += 1;
        if predicted == label {
            correct += 1;
            counts.correct += 1;
        }
    }

    let total = labels.len();
    Ok(Evaluation {
        total,
        correct,
        accuracy: if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        },
        per_class,
    })
}
