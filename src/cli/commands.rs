//! Command implementations for the wordsmith CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ToolkitConfig;
use crate::document::{BasicDocument, Document, EfficientDocument, read_prefix, run_benchmark};
use crate::error::{Result, WordsmithError};
use crate::spelling::*;
use crate::textgen::{ListOfListsGenerator, MarkovTextGenerator};

/// Execute a CLI command.
pub fn execute_command(args: WordsmithArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Check(check_args) => check_words(check_args, &args),
        Command::Complete(complete_args) => complete_prefix(complete_args, &config, &args),
        Command::Path(path_args) => find_word_path(path_args, &config, &args),
        Command::Suggest(suggest_args) => suggest_spellings(suggest_args, &config, &args),
        Command::Readability(readability_args) => score_readability(readability_args, &args),
        Command::Generate(generate_args) => generate_text(generate_args, &config, &args),
        Command::Benchmark(benchmark_args) => benchmark_documents(benchmark_args, &config, &args),
    }
}

/// Load the configuration file named on the command line, if any.
fn load_config(args: &WordsmithArgs) -> Result<ToolkitConfig> {
    match &args.config {
        Some(path) => ToolkitConfig::from_file(path),
        None => Ok(ToolkitConfig::default()),
    }
}

/// Build a trie from a word list file.
fn load_trie(path: &Path) -> Result<TrieDictionary> {
    let mut dictionary = TrieDictionary::new();
    load_dictionary(&mut dictionary, path)?;
    if dictionary.size() == 0 {
        warn!("dictionary {} holds no words", path.display());
    }
    Ok(dictionary)
}

/// Report dictionary membership for each word.
fn check_words(args: &CheckArgs, cli_args: &WordsmithArgs) -> Result<()> {
    let dictionary = load_trie(&args.dictionary)?;

    let words = args
        .words
        .iter()
        .map(|word| WordCheck {
            word: word.clone(),
            is_word: dictionary.is_word(word),
        })
        .collect();

    output_result(
        "Dictionary check",
        &CheckResult {
            dictionary_size: dictionary.size(),
            words,
        },
        cli_args,
    )
}

/// Complete a prefix.
fn complete_prefix(
    args: &CompleteArgs,
    config: &ToolkitConfig,
    cli_args: &WordsmithArgs,
) -> Result<()> {
    let dictionary = load_trie(&args.dictionary)?;
    let limit = args.limit.unwrap_or(config.completion.default_limit);

    output_result(
        "Completions",
        &CompletionResult {
            prefix: args.prefix.clone(),
            completions: dictionary.predict_completions(&args.prefix, limit),
        },
        cli_args,
    )
}

/// Search for a word ladder.
fn find_word_path(args: &PathArgs, config: &ToolkitConfig, cli_args: &WordsmithArgs) -> Result<()> {
    let dictionary = load_trie(&args.dictionary)?;

    let mut path_config = config.path.clone();
    if let Some(max_expansions) = args.max_expansions {
        path_config.max_expansions = max_expansions;
    }

    let neighbors = NearbyWords::with_config(&dictionary, config.suggestion.clone());
    let finder = WordPathTree::with_config(neighbors, path_config);

    let start_time = Instant::now();
    let (tree, path) = finder.search(&args.start, &args.goal)?;
    let duration = start_time.elapsed();

    match &path {
        Some(words) => info!("ladder of {} words found", words.len()),
        None => info!("no ladder from {:?} to {:?}", args.start, args.goal),
    }

    output_result(
        "Word ladder",
        &PathResult {
            start: args.start.clone(),
            goal: args.goal.clone(),
            path,
            nodes_explored: tree.len(),
            duration_ms: duration.as_millis() as u64,
            tree: args.show_tree.then(|| tree.to_string()),
        },
        cli_args,
    )
}

/// Suggest spellings for a word.
fn suggest_spellings(
    args: &SuggestArgs,
    config: &ToolkitConfig,
    cli_args: &WordsmithArgs,
) -> Result<()> {
    let dictionary = load_trie(&args.dictionary)?;

    let mut suggestion_config = config.suggestion.clone();
    if let Some(max_visited) = args.max_visited {
        suggestion_config.max_visited = max_visited;
    }
    let limit = args.limit.unwrap_or(suggestion_config.max_suggestions);

    let nearby = NearbyWords::with_config(&dictionary, suggestion_config);
    let normalized = normalize(&args.word);
    let suggestions = nearby
        .suggestions(&args.word, limit)
        .into_iter()
        .map(|word| Suggestion {
            distance: levenshtein_distance(&normalized, &word),
            word,
        })
        .collect();

    output_result(
        "Suggestions",
        &SuggestResult {
            word: args.word.clone(),
            is_word: dictionary.is_word(&args.word),
            suggestions,
        },
        cli_args,
    )
}

/// Score a text file.
fn score_readability(args: &ReadabilityArgs, cli_args: &WordsmithArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;

    let document: Box<dyn Document> = match args.mode {
        DocumentMode::Basic => Box::new(BasicDocument::new(text)),
        DocumentMode::Efficient => Box::new(EfficientDocument::new(text)),
    };

    output_result(
        "Readability",
        &ReadabilityResult {
            file: args.file.to_string_lossy().to_string(),
            words: document.num_words(),
            sentences: document.num_sentences(),
            syllables: document.num_syllables(),
            flesch_score: document.flesch_score(),
        },
        cli_args,
    )
}

/// Train a generator on a file and produce text.
fn generate_text(args: &GenerateArgs, config: &ToolkitConfig, cli_args: &WordsmithArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;

    let mut generator_config = config.generator.clone();
    if args.seed.is_some() {
        generator_config.seed = args.seed;
    }

    let mut generator = ListOfListsGenerator::with_config(&generator_config);
    generator.train(&text);
    if !generator.is_trained() {
        return Err(WordsmithError::analysis(format!(
            "no words to train on in {}",
            args.file.display()
        )));
    }

    output_result(
        "Generated text",
        &GenerationResult {
            vocabulary_size: generator.vocabulary_size(),
            text: generator.generate_text(args.words),
        },
        cli_args,
    )
}

/// Time both document implementations.
fn benchmark_documents(
    args: &BenchmarkArgs,
    config: &ToolkitConfig,
    cli_args: &WordsmithArgs,
) -> Result<()> {
    let mut benchmark_config = config.benchmark.clone();
    if let Some(trials) = args.trials {
        benchmark_config.trials = trials;
    }
    if let Some(start) = args.start {
        benchmark_config.start = start;
    }
    if let Some(increment) = args.increment {
        benchmark_config.increment = increment;
    }
    if let Some(steps) = args.steps {
        benchmark_config.steps = steps;
    }
    benchmark_config.validate()?;

    let largest = benchmark_config.sizes().last().unwrap_or(0);
    let text = read_prefix(&args.file, largest)?;

    let started_at = Utc::now();
    let rows = run_benchmark(&text, &benchmark_config)?;

    output_result(
        "Benchmark results",
        &BenchmarkReport {
            started_at,
            trials: benchmark_config.trials,
            rows,
        },
        cli_args,
    )
}
