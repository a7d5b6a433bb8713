//! Text analysis for Sentira.
//!
//! Analysis converts raw sentences into token sequences before vectorization.
//! All tokenizers are deterministic: the same input text always produces the
//! same token sequence, which in turn makes vocabularies and trained models
//! reproducible.

pub mod tokenizer;

pub use tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer, default_tokenizer,
};
