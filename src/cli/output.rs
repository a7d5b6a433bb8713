//! Output formatting for CLI commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::classifier::Evaluation;
use crate::cli::args::SentiraArgs;
use crate::error::Result;

/// Supported output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Result structure for the train command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub training_examples: usize,
    pub vocab_size: usize,
    pub classes: Vec<i64>,
    pub priors: Vec<f64>,
    pub smoothing: f64,
    pub binary_features: bool,
    pub evaluation: Option<Evaluation>,
}

/// Result structure for the predict command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub text: String,
    pub label: i64,
    pub probabilities: Option<Vec<ClassProbability>>,
}

/// A class label paired with its predicted probability.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: i64,
    pub probability: f64,
}

/// Output a result in the format requested on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SentiraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SentiraArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    print_value("", &value);

    Ok(())
}

/// Recursively print a JSON value as indented key/value lines.
fn print_value(indent: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                match val {
                    serde_json::Value::Object(_) => {
                        println!("{indent}{key}:");
                        print_value(&format!("{indent}  "), val);
                    }
                    serde_json::Value::Array(items)
                        if items.iter().any(|i| i.is_object() || i.is_array()) =>
                    {
                        println!("{indent}{key}:");
                        for item in items {
                            print_value(&format!("{indent}  "), item);
                        }
                    }
                    serde_json::Value::Null => {}
                    _ => println!("{indent}{key}: {val}"),
                }
            }
        }
        _ => println!("{indent}{value}"),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SentiraArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
