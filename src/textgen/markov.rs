//! First-order Markov text generator.
//!
//! Training records, for every distinct word, the list of words that
//! followed it in the source text (duplicates kept, so common successors are
//! proportionally more likely). Generation starts at the first word of the
//! source and repeatedly picks a uniformly random successor.

use std::fmt;

use ahash::AHashMap;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A text generator trained on sample text.
pub trait MarkovTextGenerator {
    /// Train on `source_text`. Does nothing if already trained.
    fn train(&mut self, source_text: &str);

    /// Generate `num_words` words separated by single spaces.
    fn generate_text(&mut self, num_words: usize) -> String;

    /// Forget everything and train from scratch on `source_text`.
    fn retrain(&mut self, source_text: &str);
}

/// Configuration for the text generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// A word and the words that followed it in the training text.
#[derive(Debug, Clone)]
struct WordNode {
    word: String,
    next_words: Vec<String>,
}

impl WordNode {
    fn new(word: &str) -> Self {
        WordNode {
            word: word.to_string(),
            next_words: Vec::new(),
        }
    }

    fn random_next_word<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        if self.next_words.is_empty() {
            return None;
        }
        let pos = rng.random_range(0..self.next_words.len());
        Some(&self.next_words[pos])
    }
}

/// Markov generator storing successors as a list per word.
#[derive(Debug, Clone)]
pub struct ListOfListsGenerator {
    nodes: Vec<WordNode>,
    index: AHashMap<String, usize>,
    starter: String,
    rng: StdRng,
}

impl ListOfListsGenerator {
    /// Create an untrained generator seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an untrained generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an untrained generator from configuration.
    pub fn with_config(config: &GeneratorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        ListOfListsGenerator {
            nodes: Vec::new(),
            index: AHashMap::new(),
            starter: String::new(),
            rng,
        }
    }

    /// Whether the generator has been trained.
    pub fn is_trained(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// The first word of the training text.
    pub fn starter(&self) -> &str {
        &self.starter
    }

    /// Number of distinct words seen in training.
    pub fn vocabulary_size(&self) -> usize {
        self.nodes.len()
    }

    /// Successors recorded for `word`, in training order.
    pub fn next_words(&self, word: &str) -> Option<&[String]> {
        self.index
            .get(word)
            .map(|&idx| self.nodes[idx].next_words.as_slice())
    }

    fn node_mut(&mut self, word: &str) -> &mut WordNode {
        let idx = match self.index.get(word) {
            Some(&idx) => idx,
            None => {
                self.nodes.push(WordNode::new(word));
                self.index.insert(word.to_string(), self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[idx]
    }
}

impl Default for ListOfListsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkovTextGenerator for ListOfListsGenerator {
    fn train(&mut self, source_text: &str) {
        if self.is_trained() {
            warn!("generator already trained; use retrain to replace the model");
            return;
        }

        let mut words = source_text.split_whitespace();
        let Some(starter) = words.next() else {
            return;
        };
        self.starter = starter.to_string();

        let mut prev_word = starter;
        for word in words {
            self.node_mut(prev_word).next_words.push(word.to_string());
            prev_word = word;
        }

        // The last word wraps around to the starter if nothing follows it.
        if !self.index.contains_key(prev_word) {
            let starter = self.starter.clone();
            self.node_mut(prev_word).next_words.push(starter);
        }

        debug!(
            "trained on {} distinct words, starter {:?}",
            self.nodes.len(),
            self.starter
        );
    }

    fn generate_text(&mut self, num_words: usize) -> String {
        if !self.is_trained() || num_words == 0 {
            return String::new();
        }

        let mut output: Vec<String> = Vec::with_capacity(num_words);
        let mut current = self.starter.clone();
        output.push(current.clone());

        while output.len() < num_words {
            let Some(&idx) = self.index.get(&current) else {
                break;
            };
            let Some(next) = self.nodes[idx].random_next_word(&mut self.rng) else {
                break;
            };
            current = next.to_string();
            output.push(current.clone());
        }

        output.join(" ")
    }

    fn retrain(&mut self, source_text: &str) {
        self.nodes.clear();
        self.index.clear();
        self.starter.clear();
        self.train(source_text);
    }
}

impl fmt::Display for ListOfListsGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}: ", node.word)?;
            for next in &node.next_words {
                write!(f, "{next}->")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
