//! Timing harness comparing the two document implementations.

use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::document::{BasicDocument, Document, EfficientDocument};
use crate::error::{Result, WordsmithError};

/// Configuration for a readability benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Constructions + scorings per document flavor and size.
    pub trials: usize,
    /// Number of characters in the first sample.
    pub start: usize,
    /// Characters added between samples.
    pub increment: usize,
    /// Number of sample sizes.
    pub steps: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            trials: 100,
            start: 50_000,
            increment: 20_000,
            steps: 20,
        }
    }
}

impl BenchmarkConfig {
    /// Check the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(WordsmithError::config("benchmark trials must be at least 1"));
        }
        if self.increment == 0 && self.steps > 1 {
            return Err(WordsmithError::config(
                "benchmark increment must be positive when running several steps",
            ));
        }
        Ok(())
    }

    /// Sample sizes, in characters, in the order they are measured.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.steps).map(|step| self.start + step * self.increment)
    }
}

/// Timings for one sample size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    /// Characters in the sample (may be less than requested near EOF).
    pub num_chars: usize,
    /// Total seconds spent on `BasicDocument` for all trials.
    pub basic_seconds: f64,
    /// Total seconds spent on `EfficientDocument` for all trials.
    pub efficient_seconds: f64,
}

/// Read the first `num_chars` characters of a text file.
pub fn read_prefix<P: AsRef<Path>>(path: P, num_chars: usize) -> Result<String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let prefix = char_prefix(&contents, num_chars);
    let found = prefix.chars().count();
    if found < num_chars {
        warn!(
            "end of file reached at {found} characters in {} ({num_chars} requested)",
            path.display()
        );
    }
    Ok(prefix.to_string())
}

/// Time both document flavors on growing prefixes of `text`.
pub fn run_benchmark(text: &str, config: &BenchmarkConfig) -> Result<Vec<BenchmarkRow>> {
    config.validate()?;
    let available = text.chars().count();
    let mut rows = Vec::with_capacity(config.steps);

    for num_chars in config.sizes() {
        if num_chars > available {
            warn!("sample of {num_chars} characters truncated to {available}");
        }
        let sample = char_prefix(text, num_chars);

        let started = Instant::now();
        for _ in 0..config.trials {
            black_box(BasicDocument::new(sample).flesch_score());
        }
        let basic_seconds = started.elapsed().as_secs_f64();

        let started = Instant::now();
        for _ in 0..config.trials {
            black_box(EfficientDocument::new(sample).flesch_score());
        }
        let efficient_seconds = started.elapsed().as_secs_f64();

        debug!("{num_chars}\t{basic_seconds:.6}\t{efficient_seconds:.6}");
        rows.push(BenchmarkRow {
            num_chars: num_chars.min(available),
            basic_seconds,
            efficient_seconds,
        });
    }

    Ok(rows)
}

/// The longest prefix of `text` holding at most `num_chars` characters.
fn char_prefix(text: &str, num_chars: usize) -> &str {
    match text.char_indices().nth(num_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
