//! Bag-of-words vectorization.
//!
//! This module turns token sequences into fixed-length numeric feature
//! vectors: [`Vocabulary`] assigns each distinct token a dense index in
//! first-seen order, and [`BowVectorizer`] maps a token sequence onto a
//! vector of per-slot presence flags or counts.

pub mod bow;
pub mod vocabulary;

pub use bow::BowVectorizer;
pub use vocabulary::Vocabulary;
