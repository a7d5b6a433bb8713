//! Command line argument parsing for the Sentira CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::output::OutputFormat;

/// Sentira - a small, deterministic text sentiment classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira")]
#[command(about = "Train and run a Naive Bayes sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentiraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentiraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier and optionally evaluate it on held-out data
    Train(TrainArgs),

    /// Train a classifier and classify a sentence
    Predict(PredictArgs),
}

/// Tokenizer selection for corpus reading.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Lowercasing `\w+` regex tokenizer (default)
    Regex,
    /// Whitespace splitting, no case folding
    Whitespace,
    /// Lowercasing Unicode word-boundary tokenizer
    UnicodeWord,
}

/// Corpus file format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// Tab-separated `sentence<TAB>label` lines
    Tsv,
    /// JSON array of `{"text": ..., "label": ...}` records
    Json,
}

/// Arguments shared by training-based commands.
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the training corpus
    #[arg(long)]
    pub train_file: PathBuf,

    /// Path to a held-out evaluation corpus
    #[arg(long)]
    pub eval_file: Option<PathBuf>,

    /// Laplace smoothing strength
    #[arg(long, default_value_t = 1.0)]
    pub delta: f64,

    /// Use binary (presence/absence) bag-of-words features
    #[arg(long)]
    pub binary: bool,

    /// Tokenizer to use
    #[arg(long, value_enum, default_value = "regex")]
    pub tokenizer: TokenizerKind,

    /// Corpus file format
    #[arg(long, value_enum, default_value = "tsv")]
    pub corpus_format: CorpusFormat,
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Training options
    #[command(flatten)]
    pub train: TrainArgs,

    /// Sentence to classify
    #[arg(long)]
    pub text: String,

    /// Also report the class probability distribution
    #[arg(long)]
    pub probabilities: bool,
}
