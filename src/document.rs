//! Readability scoring for plain-text documents.
//!
//! A [`Document`] reports word, sentence and syllable counts and derives the
//! Flesch reading-ease score from them. Two implementations are provided:
//! [`BasicDocument`] rescans the text for every count, while
//! [`EfficientDocument`] counts everything in a single pass up front.

pub mod basic;
pub mod benchmark;
pub mod efficient;

use lazy_static::lazy_static;
use regex::Regex;

pub use basic::BasicDocument;
pub use benchmark::{BenchmarkConfig, BenchmarkRow, read_prefix, run_benchmark};
pub use efficient::EfficientDocument;

lazy_static! {
    /// A word is a maximal run of ASCII letters.
    pub(crate) static ref WORD_PATTERN: Regex =
        Regex::new(r"[a-zA-Z]+").expect("word pattern should be valid");
    /// A sentence is a maximal run of text without terminal punctuation.
    pub(crate) static ref SENTENCE_PATTERN: Regex =
        Regex::new(r"[^!?.]+").expect("sentence pattern should be valid");
    /// Words and runs of terminal punctuation, for single-pass counting.
    pub(crate) static ref WORD_OR_TERMINATOR_PATTERN: Regex =
        Regex::new(r"[!?.]+|[a-zA-Z]+").expect("token pattern should be valid");
}

/// A text document that can be scored for readability.
pub trait Document {
    /// The full text of the document.
    fn text(&self) -> &str;

    /// Number of words.
    fn num_words(&self) -> usize;

    /// Number of sentences.
    fn num_sentences(&self) -> usize;

    /// Number of syllables across all words.
    fn num_syllables(&self) -> usize;

    /// Flesch reading-ease score; higher is easier to read.
    ///
    /// Empty word or sentence counts are treated as one, so an empty text
    /// scores 206.835 instead of producing NaN.
    fn flesch_score(&self) -> f64 {
        let words = self.num_words().max(1) as f64;
        let sentences = self.num_sentences().max(1) as f64;
        let syllables = self.num_syllables() as f64;
        206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
    }
}

/// All substrings of `text` matching `pattern`, in order.
pub fn tokens<'t>(text: &'t str, pattern: &Regex) -> Vec<&'t str> {
    pattern.find_iter(text).map(|m| m.as_str()).collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count the syllables of a single word.
///
/// Each maximal run of vowels (`y` included) is one syllable, except that a
/// lone `e` at the very end does not count when the word already has one.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut syllables = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_vowel(chars[i]) {
            i += 1;
            continue;
        }
        if chars[i] == 'e' && i == chars.len() - 1 && syllables != 0 {
            break;
        }
        syllables += 1;
        while i < chars.len() && is_vowel(chars[i]) {
            i += 1;
        }
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("be"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("here"), 1);
        assert_eq!(count_syllables("many"), 2);
        assert_eq!(count_syllables("sentence"), 2);
        assert_eq!(count_syllables("sentences"), 3);
        assert_eq!(count_syllables("Senteeeeeeeeeences"), 3);
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("AREA"), 2);
    }

    #[test]
    fn test_tokens() {
        let text = "Hello, world! How are you?";
        assert_eq!(
            tokens(text, &WORD_PATTERN),
            vec!["Hello", "world", "How", "are", "you"]
        );
        assert_eq!(
            tokens(text, &WORD_OR_TERMINATOR_PATTERN),
            vec!["Hello", "world", "!", "How", "are", "you", "?"]
        );
        assert_eq!(tokens(text, &SENTENCE_PATTERN).len(), 2);
    }
}
