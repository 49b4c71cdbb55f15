//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordsmithArgs};
use crate::document::BenchmarkRow;
use crate::error::Result;

/// Membership of a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheck {
    pub word: String,
    pub is_word: bool,
}

/// Result structure for dictionary checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub dictionary_size: usize,
    pub words: Vec<WordCheck>,
}

/// Result structure for prefix completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResult {
    pub prefix: String,
    pub completions: Vec<String>,
}

/// Result structure for word ladder search.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResult {
    pub start: String,
    pub goal: String,
    pub path: Option<Vec<String>>,
    pub nodes_explored: usize,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,
}

/// A suggested spelling and its edit distance from the input.
#[derive(Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Result structure for spelling suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub is_word: bool,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for readability scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadabilityResult {
    pub file: String,
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub flesch_score: f64,
}

/// Result structure for text generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    pub vocabulary_size: usize,
    pub text: String,
}

/// Benchmark results.
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub started_at: DateTime<Utc>,
    pub trials: usize,
    pub rows: Vec<BenchmarkRow>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordsmithArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordsmithArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    if std::any::type_name::<T>().contains("BenchmarkReport") {
        print!("{}", format_benchmark_human(&value));
    } else {
        print!("{}", format_generic_human(&value));
    }
    Ok(())
}

/// Render benchmark rows as a tab-separated table.
fn format_benchmark_human(value: &serde_json::Value) -> String {
    let mut out = String::new();
    if let Some(started) = value.get("started_at").and_then(|s| s.as_str()) {
        out.push_str(&format!("Started: {started}\n"));
    }
    if let Some(trials) = value.get("trials").and_then(|t| t.as_u64()) {
        out.push_str(&format!("Trials: {trials}\n"));
    }
    out.push_str("NumberOfChars\tBasicTime\tEfficientTime\n");

    if let Some(rows) = value.get("rows").and_then(|r| r.as_array()) {
        for row in rows {
            let chars = row.get("num_chars").and_then(|c| c.as_u64()).unwrap_or(0);
            let basic = row.get("basic_seconds").and_then(|b| b.as_f64()).unwrap_or(0.0);
            let efficient = row
                .get("efficient_seconds")
                .and_then(|e| e.as_f64())
                .unwrap_or(0.0);
            out.push_str(&format!("{chars}\t{basic:.6}\t{efficient:.6}\n"));
        }
    }
    out
}

/// Render an object as `key: value` lines.
fn format_generic_human(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}: {}\n", format_value(val)))
            .collect(),
        _ => format!("{}\n", format_value(value)),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordsmithArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let formatted_fields = obj
                .iter()
                .map(|(key, val)| format!("{key}={}", format_value(val)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{{{formatted_fields}}}")
        }
        serde_json::Value::Null => "none".to_string(),
    }
}
