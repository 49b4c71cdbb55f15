//! Edit-distance-one neighbor generation and spelling suggestions.

use std::collections::VecDeque;

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::{Dictionary, normalize};

/// Letters tried for substitutions and insertions.
const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// A source of words one mutation away from a given word.
///
/// The word ladder search only depends on this trait, so any neighbor
/// generator (or a canned one in tests) can drive it.
pub trait NeighborSource {
    /// Return the distinct strings one substitution, insertion or deletion
    /// away from `word`. With `words_only` set, only dictionary words are
    /// returned. The result never contains `word` itself.
    fn distance_one(&self, word: &str, words_only: bool) -> Vec<String>;
}

impl<T: NeighborSource + ?Sized> NeighborSource for &T {
    fn distance_one(&self, word: &str, words_only: bool) -> Vec<String> {
        (**self).distance_one(word, words_only)
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Stop the search once this many candidate strings have been seen.
    pub max_visited: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: 10,
            max_visited: 1000,
        }
    }
}

/// Neighbor generator over a borrowed dictionary.
pub struct NearbyWords<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    config: SuggestionConfig,
}

impl<'a, D: Dictionary + ?Sized> NearbyWords<'a, D> {
    /// Create a neighbor generator with the default configuration.
    pub fn new(dictionary: &'a D) -> Self {
        NearbyWords {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a neighbor generator with custom configuration.
    pub fn with_config(dictionary: &'a D, config: SuggestionConfig) -> Self {
        NearbyWords { dictionary, config }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// The dictionary neighbors are checked against.
    pub fn dictionary(&self) -> &D {
        self.dictionary
    }

    /// Strings obtained by replacing one character of `word`.
    pub fn substitutions(&self, word: &str, words_only: bool) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = Candidates::new(word);

        for i in 0..chars.len() {
            for ch in ALPHABET {
                if ch == chars[i] {
                    continue;
                }
                let mut mutated = chars.clone();
                mutated[i] = ch;
                self.offer(&mut found, mutated.into_iter().collect(), words_only);
            }
        }

        found.into_vec()
    }

    /// Strings obtained by inserting one character anywhere in `word`.
    pub fn insertions(&self, word: &str, words_only: bool) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = Candidates::new(word);

        for i in 0..=chars.len() {
            for ch in ALPHABET {
                let mut mutated = chars.clone();
                mutated.insert(i, ch);
                self.offer(&mut found, mutated.into_iter().collect(), words_only);
            }
        }

        found.into_vec()
    }

    /// Strings obtained by deleting one character of `word`.
    pub fn deletions(&self, word: &str, words_only: bool) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = Candidates::new(word);

        for i in 0..chars.len() {
            let mut mutated = chars.clone();
            mutated.remove(i);
            self.offer(&mut found, mutated.into_iter().collect(), words_only);
        }

        found.into_vec()
    }

    /// Spelling suggestions for a possibly misspelled word.
    ///
    /// Explores mutations breadth-first (closest first), collecting
    /// dictionary words until `num_suggestions` are found or
    /// `max_visited` strings have been seen.
    pub fn suggestions(&self, word: &str, num_suggestions: usize) -> Vec<String> {
        let word = normalize(word);
        let mut suggestions = Vec::new();
        if num_suggestions == 0 || word.is_empty() {
            return suggestions;
        }

        let mut queue = VecDeque::from([word.clone()]);
        let mut visited = AHashSet::new();
        visited.insert(word);

        while let Some(current) = queue.pop_front() {
            if suggestions.len() >= num_suggestions || visited.len() >= self.config.max_visited {
                break;
            }
            for candidate in self.distance_one(&current, false) {
                if !visited.insert(candidate.clone()) {
                    continue;
                }
                if self.dictionary.is_word(&candidate) {
                    suggestions.push(candidate.clone());
                    if suggestions.len() >= num_suggestions {
                        break;
                    }
                }
                queue.push_back(candidate);
            }
        }

        debug!(
            "found {} suggestions after visiting {} strings",
            suggestions.len(),
            visited.len()
        );
        suggestions
    }

    fn offer(&self, found: &mut Candidates, candidate: String, words_only: bool) {
        if !words_only || self.dictionary.is_word(&candidate) {
            found.push(candidate);
        }
    }
}

impl<D: Dictionary + ?Sized> NeighborSource for NearbyWords<'_, D> {
    fn distance_one(&self, word: &str, words_only: bool) -> Vec<String> {
        let word = normalize(word);
        let mut found = Candidates::new(&word);
        for candidate in self
            .substitutions(&word, words_only)
            .into_iter()
            .chain(self.insertions(&word, words_only))
            .chain(self.deletions(&word, words_only))
        {
            found.push(candidate);
        }
        found.into_vec()
    }
}

/// Ordered, de-duplicated candidate list that never holds the source word.
struct Candidates {
    source: String,
    seen: AHashSet<String>,
    ordered: Vec<String>,
}

impl Candidates {
    fn new(source: &str) -> Self {
        Candidates {
            source: source.to_string(),
            seen: AHashSet::new(),
            ordered: Vec::new(),
        }
    }

    fn push(&mut self, candidate: String) {
        if candidate != self.source && self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
