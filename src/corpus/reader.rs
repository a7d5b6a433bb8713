//! Reading labeled examples from files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use super::{LabeledSentence, SentimentExample};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, SentiraError};

/// Read sentiment examples from a tab-separated file.
///
/// Each line is `sentence<TAB>label`, with the label taken from the trailing
/// tab-separated field. Lines with fewer than two fields are skipped with a
/// warning; a trailing field that is not an integer is a corpus error.
pub fn read_examples<P: AsRef<Path>>(
    path: P,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<SentimentExample>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut examples = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let parts: Vec<&str> = line.trim().split('\t').collect();

        if parts.len() < 2 {
            warn!(
                "skipping malformed line {} in {}: fewer than 2 tab-separated fields",
                line_number + 1,
                path.display()
            );
            continue;
        }

        let sentence = parts[0];
        let label: i64 = parts[parts.len() - 1].parse().map_err(|_| {
            SentiraError::corpus(format!(
                "invalid label {:?} on line {} in {}",
                parts[parts.len() - 1],
                line_number + 1,
                path.display()
            ))
        })?;

        let words = tokenizer.tokenize(sentence)?;
        examples.push(SentimentExample::new(words, label));
    }

    Ok(examples)
}

/// Read sentiment examples from a JSON file.
///
/// The file holds an array of `{"text": ..., "label": ...}` records; each text
/// is tokenized with the supplied tokenizer.
pub fn read_examples_json<P: AsRef<Path>>(
    path: P,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<SentimentExample>> {
    let content = std::fs::read_to_string(path)?;
    let sentences: Vec<LabeledSentence> = serde_json::from_str(&content)?;

    let mut examples = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let words = tokenizer.tokenize(&sentence.text)?;
        examples.push(SentimentExample::new(words, sentence.label));
    }

    Ok(examples)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::analysis::tokenizer::default_tokenizer;

    #[test]
    fn test_read_examples() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "A good movie\t1").unwrap();
        writeln!(file, "a bad movie\t0").unwrap();
        file.flush().unwrap();

        let tokenizer = default_tokenizer().unwrap();
        let examples = read_examples(file.path(), &tokenizer).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].words, vec!["a", "good", "movie"]);
        assert_eq!(examples[0].label, 1);
        assert_eq!(examples[1].words, vec!["a", "bad", "movie"]);
        assert_eq!(examples[1].label, 0);
    }

    #[test]
    fn test_read_examples_skips_short_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "no label here").unwrap();
        writeln!(file, "a fine film\t1").unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();

        let tokenizer = default_tokenizer().unwrap();
        let examples = read_examples(file.path(), &tokenizer).unwrap();

        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].label, 1);
    }

    #[test]
    fn test_read_examples_trailing_field_is_label() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "odd\textra\t0").unwrap();
        file.flush().unwrap();

        let tokenizer = default_tokenizer().unwrap();
        let examples = read_examples(file.path(), &tokenizer).unwrap();

        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].words, vec!["odd"]);
        assert_eq!(examples[0].label, 0);
    }

    #[test]
    fn test_read_examples_bad_label() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a film\tpositive").unwrap();
        file.flush().unwrap();

        let tokenizer = default_tokenizer().unwrap();
        let result = read_examples(file.path(), &tokenizer);

        assert!(matches!(result, Err(SentiraError::Corpus(_))));
    }

    #[test]
    fn test_read_examples_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"text": "Great movie", "label": 1}}, {{"text": "terrible", "label": 0}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let tokenizer = default_tokenizer().unwrap();
        let examples = read_examples_json(file.path(), &tokenizer).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].words, vec!["great", "movie"]);
        assert_eq!(examples[1].label, 0);
    }

    #[test]
    fn test_read_examples_missing_file() {
        let tokenizer = default_tokenizer().unwrap();
        let result = read_examples("/nonexistent/corpus.tsv", &tokenizer);

        assert!(matches!(result, Err(SentiraError::Io(_))));
    }
}
