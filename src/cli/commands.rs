//! Command implementations for the Sentira CLI.

use std::path::Path;

use log::info;

use crate::analysis::tokenizer::{
    Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer, default_tokenizer,
};
use crate::classifier::{NaiveBayes, evaluate};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{SentimentExample, read_examples, read_examples_json};
use crate::error::Result;
use crate::vectorize::{BowVectorizer, Vocabulary};

/// Execute a CLI command.
pub fn execute_command(args: SentiraArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
    }
}

/// Train a classifier and optionally evaluate it against held-out data.
fn train(args: TrainArgs, cli_args: &SentiraArgs) -> Result<()> {
    let tokenizer = build_tokenizer(args.tokenizer)?;
    let examples = load_corpus(&args.train_file, args.corpus_format, tokenizer.as_ref())?;

    if cli_args.verbosity() > 1 {
        println!(
            "Read {} training examples from {}",
            examples.len(),
            args.train_file.display()
        );
    }

    let vocab = Vocabulary::from_examples(&examples);
    let vectorizer = BowVectorizer::new().with_binary(args.binary);
    let features = vectorizer.vectorize_all(&examples, &vocab);
    let labels: Vec<i64> = examples.iter().map(|e| e.label).collect();

    let mut model = NaiveBayes::new().with_smoothing(args.delta);
    model.fit(&features, &labels)?;
    info!(
        "trained on {} examples, vocabulary size {}",
        examples.len(),
        vocab.len()
    );

    let evaluation = match &args.eval_file {
        Some(eval_file) => {
            let eval_examples = load_corpus(eval_file, args.corpus_format, tokenizer.as_ref())?;
            let eval_features = vectorizer.vectorize_all(&eval_examples, &vocab);
            let eval_labels: Vec<i64> = eval_examples.iter().map(|e| e.label).collect();
            Some(evaluate(&model, &eval_features, &eval_labels)?)
        }
        None => None,
    };

    let classes = model.classes().to_vec();
    let priors: Vec<f64> = classes.iter().filter_map(|&c| model.prior(c)).collect();

    output_result(
        "Training complete",
        &TrainingResult {
            training_examples: examples.len(),
            vocab_size: vocab.len(),
            classes,
            priors,
            smoothing: args.delta,
            binary_features: args.binary,
            evaluation,
        },
        cli_args,
    )
}

/// Train a classifier and classify a single sentence.
fn predict(args: PredictArgs, cli_args: &SentiraArgs) -> Result<()> {
    let tokenizer = build_tokenizer(args.train.tokenizer)?;
    let examples = load_corpus(
        &args.train.train_file,
        args.train.corpus_format,
        tokenizer.as_ref(),
    )?;

    let vocab = Vocabulary::from_examples(&examples);
    let vectorizer = BowVectorizer::new().with_binary(args.train.binary);
    let features = vectorizer.vectorize_all(&examples, &vocab);
    let labels: Vec<i64> = examples.iter().map(|e| e.label).collect();

    let mut model = NaiveBayes::new().with_smoothing(args.train.delta);
    model.fit(&features, &labels)?;

    let tokens = tokenizer.tokenize(&args.text)?;
    let feature = vectorizer.vectorize(&tokens, &vocab);
    let label = model.predict(&feature)?;

    let probabilities = if args.probabilities {
        let probs = model.predict_proba(&feature)?;
        Some(
            model
                .classes()
                .iter()
                .zip(probs)
                .map(|(&label, probability)| ClassProbability { label, probability })
                .collect(),
        )
    } else {
        None
    };

    output_result(
        "Prediction complete",
        &PredictionResult {
            text: args.text,
            label,
            probabilities,
        },
        cli_args,
    )
}

/// Build the tokenizer selected on the command line.
fn build_tokenizer(kind: TokenizerKind) -> Result<Box<dyn Tokenizer>> {
    Ok(match kind {
        TokenizerKind::Regex => Box::new(default_tokenizer()?),
        TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer::new()),
        TokenizerKind::UnicodeWord => Box::new(UnicodeWordTokenizer::new().with_lowercase(true)),
    })
}

/// Load a corpus file in the selected format.
fn load_corpus(
    path: &Path,
    format: CorpusFormat,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<SentimentExample>> {
    match format {
        CorpusFormat::Tsv => read_examples(path, tokenizer),
        CorpusFormat::Json => read_examples_json(path, tokenizer),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_corpus() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a good movie\t1").unwrap();
        writeln!(file, "great film\t1").unwrap();
        writeln!(file, "a bad movie\t0").unwrap();
        writeln!(file, "terrible film\t0").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_execute_train_command() {
        let train = write_corpus();
        let eval = write_corpus();

        let args = SentiraArgs::parse_from([
            "sentira",
            "-q",
            "train",
            "--train-file",
            train.path().to_str().unwrap(),
            "--eval-file",
            eval.path().to_str().unwrap(),
        ]);

        execute_command(args).unwrap();
    }

    #[test]
    fn test_execute_predict_command() {
        let train = write_corpus();

        let args = SentiraArgs::parse_from([
            "sentira",
            "-q",
            "--format",
            "json",
            "predict",
            "--train-file",
            train.path().to_str().unwrap(),
            "--text",
            "a good film",
            "--probabilities",
        ]);

        execute_command(args).unwrap();
    }

    #[test]
    fn test_train_command_missing_file() {
        let args = SentiraArgs::parse_from([
            "sentira",
            "train",
            "--train-file",
            "/nonexistent/train.tsv",
        ]);

        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_build_tokenizer_kinds() {
        assert_eq!(build_tokenizer(TokenizerKind::Regex).unwrap().name(), "regex");
        assert_eq!(
            build_tokenizer(TokenizerKind::Whitespace).unwrap().name(),
            "whitespace"
        );
        assert_eq!(
            build_tokenizer(TokenizerKind::UnicodeWord).unwrap().name(),
            "unicode_word"
        );
    }
}
