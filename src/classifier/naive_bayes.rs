//! Naive Bayes classifier with add-delta (Laplace) smoothing.

use log::debug;

use super::ModelMetadata;
use crate::error::{Result, SentiraError};

/// Multinomial-style Naive Bayes classifier over bag-of-words features.
///
/// The model is populated by a single [`fit`](NaiveBayes::fit) call and is
/// read-only afterwards; every prediction method takes `&self`, so a trained
/// model can be shared freely across threads. Classes are kept in
/// first-seen-at-fit order, and that order is reused for every posterior and
/// probability vector the model returns.
///
/// The log-likelihood is the weighted form `Σ feature[i] * ln(p(word_i | c))`:
/// feature counts act as per-occurrence exponents on the smoothed conditional
/// probabilities.
///
/// # Examples
///
/// ```
/// use sentira::classifier::NaiveBayes;
///
/// let features = vec![vec![1.0, 1.0, 0.0], vec![0.0, 1.0, 1.0]];
/// let labels = vec![1, 0];
///
/// let mut model = NaiveBayes::new();
/// model.fit(&features, &labels).unwrap();
///
/// assert_eq!(model.predict(&[1.0, 1.0, 0.0]).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    /// Observed class labels, in first-seen order at fit time.
    classes: Vec<i64>,
    /// Prior probability per class, parallel to `classes`.
    priors: Vec<f64>,
    /// Smoothed conditional probability row per class, parallel to `classes`.
    conditionals: Vec<Vec<f64>>,
    /// Feature vector length recorded at fit time.
    vocab_size: usize,
    /// Smoothing strength.
    delta: f64,
    /// Metadata recorded by the last fit.
    metadata: Option<ModelMetadata>,
}

impl NaiveBayes {
    /// Create an untrained classifier with smoothing strength 1.0.
    pub fn new() -> Self {
        NaiveBayes {
            classes: Vec::new(),
            priors: Vec::new(),
            conditionals: Vec::new(),
            vocab_size: 0,
            delta: 1.0,
            metadata: None,
        }
    }

    /// Set the smoothing strength.
    ///
    /// `delta = 0.0` disables smoothing; words unseen in a class then carry
    /// zero probability and force `-inf` log-likelihoods.
    pub fn with_smoothing(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Train the classifier on a feature matrix and parallel labels.
    ///
    /// Estimates one prior per distinct label (in first-seen order) and one
    /// smoothed conditional probability row per class:
    /// `(word_count + delta) / (total_words + delta * vocab_size)`.
    ///
    /// Fails with [`SentiraError::InvalidArgument`] on empty input, a
    /// features/labels length mismatch, ragged feature rows, or a negative
    /// smoothing strength. Training is deterministic: identical input always
    /// produces an identical model.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[i64]) -> Result<()> {
        if features.is_empty() {
            return Err(SentiraError::invalid_argument(
                "training features must not be empty",
            ));
        }
        if features.len() != labels.len() {
            return Err(SentiraError::invalid_argument(format!(
                "features/labels length mismatch: {} features, {} labels",
                features.len(),
                labels.len()
            )));
        }
        if self.delta < 0.0 {
            return Err(SentiraError::invalid_argument(format!(
                "smoothing strength must be non-negative, got {}",
                self.delta
            )));
        }

        let vocab_size = features[0].len();
        for (row, feature) in features.iter().enumerate() {
            if feature.len() != vocab_size {
                return Err(SentiraError::invalid_argument(format!(
                    "ragged feature matrix: row {} has length {}, expected {}",
                    row,
                    feature.len(),
                    vocab_size
                )));
            }
        }

        // Class priors, classes kept in first-seen order.
        let mut classes: Vec<i64> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for &label in labels {
            match classes.iter().position(|&c| c == label) {
                Some(idx) => counts[idx] += 1,
                None => {
                    classes.push(label);
                    counts.push(1);
                }
            }
        }

        let total = labels.len() as f64;
        let priors: Vec<f64> = counts.iter().map(|&count| count as f64 / total).collect();

        // Per-class smoothed conditional probabilities.
        let mut conditionals = Vec::with_capacity(classes.len());
        for &class in &classes {
            let mut word_counts = vec![0.0; vocab_size];
            for (feature, &label) in features.iter().zip(labels) {
                if label == class {
                    for (slot, value) in word_counts.iter_mut().zip(feature) {
                        *slot += value;
                    }
                }
            }

            let total_words: f64 = word_counts.iter().sum();
            let denominator = total_words + self.delta * vocab_size as f64;
            let row: Vec<f64> = word_counts
                .iter()
                .map(|&count| (count + self.delta) / denominator)
                .collect();

            conditionals.push(row);
        }

        debug!(
            "fit {} examples, {} classes, vocab size {}, delta {}",
            labels.len(),
            classes.len(),
            vocab_size,
            self.delta
        );

        self.metadata = Some(ModelMetadata {
            trained_at: chrono::Utc::now(),
            training_examples: labels.len(),
            vocab_size,
            num_classes: classes.len(),
            smoothing: self.delta,
        });
        self.classes = classes;
        self.priors = priors;
        self.conditionals = conditionals;
        self.vocab_size = vocab_size;

        Ok(())
    }

    /// Compute log-posteriors for a feature vector, one per class in the
    /// model's class order.
    ///
    /// `log_posterior(c) = ln(prior(c)) + Σ feature[i] * ln(p(word_i | c))`.
    pub fn posteriors(&self, feature: &[f64]) -> Result<Vec<f64>> {
        self.check_trained()?;
        if feature.len() != self.vocab_size {
            return Err(SentiraError::invalid_argument(format!(
                "feature length {} does not match vocab size {}",
                feature.len(),
                self.vocab_size
            )));
        }

        let mut log_posteriors = Vec::with_capacity(self.classes.len());
        for (prior, conditionals) in self.priors.iter().zip(&self.conditionals) {
            let mut log_likelihood = 0.0;
            for (value, probability) in feature.iter().zip(conditionals) {
                log_likelihood += value * probability.ln();
            }
            log_posteriors.push(prior.ln() + log_likelihood);
        }

        Ok(log_posteriors)
    }

    /// Predict the class label for a feature vector.
    ///
    /// Returns the class with the maximal log-posterior; ties go to the class
    /// seen first at fit time.
    pub fn predict(&self, feature: &[f64]) -> Result<i64> {
        let log_posteriors = self.posteriors(feature)?;

        let mut best = 0;
        for (idx, &log_posterior) in log_posteriors.iter().enumerate() {
            if log_posterior > log_posteriors[best] {
                best = idx;
            }
        }

        Ok(self.classes[best])
    }

    /// Predict the probability distribution over classes for a feature
    /// vector, in the model's class order.
    ///
    /// Applies a numerically stable softmax to the log-posteriors; the
    /// returned values are positive and sum to 1.
    pub fn predict_proba(&self, feature: &[f64]) -> Result<Vec<f64>> {
        let log_posteriors = self.posteriors(feature)?;
        Ok(softmax(&log_posteriors))
    }

    /// Observed class labels, in the order used by all prediction outputs.
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Prior probability of a class, if it was observed at fit time.
    pub fn prior(&self, label: i64) -> Option<f64> {
        self.class_index(label).map(|idx| self.priors[idx])
    }

    /// Smoothed conditional probability row of a class.
    pub fn conditional(&self, label: i64) -> Option<&[f64]> {
        self.class_index(label)
            .map(|idx| self.conditionals[idx].as_slice())
    }

    /// Feature vector length recorded at fit time.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Smoothing strength.
    pub fn smoothing(&self) -> f64 {
        self.delta
    }

    /// Check whether the model has been trained.
    pub fn is_trained(&self) -> bool {
        !self.classes.is_empty() && !self.conditionals.is_empty()
    }

    /// Metadata recorded by the last fit, if any.
    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.metadata.as_ref()
    }

    fn check_trained(&self) -> Result<()> {
        if self.is_trained() {
            Ok(())
        } else {
            Err(SentiraError::model_not_trained(
                "call fit before predicting",
            ))
        }
    }

    fn class_index(&self, label: i64) -> Option<usize> {
        self.classes.iter().position(|&c| c == label)
    }
}

/// Numerically stable softmax: subtract the max before exponentiating.
fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|&v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}
