//! Command line argument parsing for the wordsmith CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wordsmith - dictionary, word ladder and readability tools
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsmith")]
#[command(about = "Dictionary lookups, completions, word ladders and readability scores")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordsmithArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDSMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordsmithArgs {
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
    /// Check whether words are in a dictionary
    Check(CheckArgs),

    /// Complete a prefix from a dictionary
    Complete(CompleteArgs),

    /// Find a word ladder between two words
    Path(PathArgs),

    /// Suggest spellings for a word
    Suggest(SuggestArgs),

    /// Score the readability of a text file
    Readability(ReadabilityArgs),

    /// Generate text from a Markov model trained on a file
    Generate(GenerateArgs),

    /// Time the document implementations on growing text samples
    Benchmark(BenchmarkArgs),
}

/// Arguments for dictionary membership checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of completions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for word ladder search
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// First word of the ladder
    #[arg(value_name = "START")]
    pub start: String,

    /// Last word of the ladder
    #[arg(value_name = "GOAL")]
    pub goal: String,

    /// Maximum number of search tree expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the search tree that was grown
    #[arg(long)]
    pub show_tree: bool,
}

/// Arguments for spelling suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Possibly misspelled word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Maximum number of candidate strings to examine
    #[arg(long)]
    pub max_visited: Option<usize>,
}

/// Arguments for readability scoring
#[derive(Parser, Debug, Clone)]
pub struct ReadabilityArgs {
    /// Text file to score
    #[arg(value_name = "TEXT_FILE")]
    pub file: PathBuf,

    /// Document implementation to use
    #[arg(short = 'm', long, default_value = "efficient")]
    pub mode: DocumentMode,
}

/// Document implementations available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
    /// Rescan the text for every count
    Basic,
    /// Count everything in one pass
    Efficient,
}

/// Arguments for text generation
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Training text file
    #[arg(value_name = "TEXT_FILE")]
    pub file: PathBuf,

    /// Number of words to generate
    #[arg(short = 'n', long, default_value = "20")]
    pub words: usize,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for benchmarking
#[derive(Parser, Debug, Clone)]
pub struct BenchmarkArgs {
    /// Text file to sample from
    #[arg(value_name = "TEXT_FILE")]
    pub file: PathBuf,

    /// Trials per document implementation and sample size
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Characters in the first sample
    #[arg(long)]
    pub start: Option<usize>,

    /// Characters added between samples
    #[arg(long)]
    pub increment: Option<usize>,

    /// Number of sample sizes
    #[arg(long)]
    pub steps: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
