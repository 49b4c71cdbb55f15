//! Dictionary abstraction shared by the trie and the hash-set word stores.

use ahash::AHashSet;

use crate::error::{Result, WordsmithError};

/// A set of legal words with case-insensitive membership.
///
/// Every implementation folds words to lower case before storing or looking
/// them up, so `"Hello"`, `"HELLO"` and `"hello"` are the same entry.
pub trait Dictionary {
    /// Add a word. Returns `Ok(true)` if it was newly added and `Ok(false)`
    /// if it was already present. Empty words are rejected.
    fn add_word(&mut self, word: &str) -> Result<bool>;

    /// Check whether the word is a complete stored word.
    fn is_word(&self, word: &str) -> bool;

    /// Number of distinct words added.
    fn size(&self) -> usize;

    /// Add every word from the iterator, returning how many were new.
    fn add_words<'a, I>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        let mut added = 0;
        for word in words {
            if self.add_word(word)? {
                added += 1;
            }
        }
        Ok(added)
    }
}

/// Fold a word to the canonical lower-case form used for storage and lookup.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Normalize a word that is about to be stored, rejecting empty input.
pub(crate) fn normalize_checked(word: &str) -> Result<String> {
    if word.is_empty() {
        return Err(WordsmithError::invalid_argument(
            "cannot add an empty word to a dictionary",
        ));
    }
    Ok(normalize(word))
}

/// A dictionary backed by a hash set.
#[derive(Debug, Clone, Default)]
pub struct HashSetDictionary {
    words: AHashSet<String>,
}

impl HashSetDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        HashSetDictionary {
            words: AHashSet::new(),
        }
    }

    /// Iterate over the stored (lower-cased) words in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for HashSetDictionary {
    fn add_word(&mut self, word: &str) -> Result<bool> {
        let normalized = normalize_checked(word)?;
        Ok(self.words.insert(normalized))
    }

    fn is_word(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    fn size(&self) -> usize {
        self.words.len()
    }
}
