//! Document that recounts on every query.

use crate::document::{Document, SENTENCE_PATTERN, WORD_PATTERN, count_syllables, tokens};

/// A document that tokenizes its text again for each count.
///
/// Simple and allocation-light to construct, but each of the three counts
/// (and therefore every Flesch score) costs one or two full scans.
#[derive(Debug, Clone)]
pub struct BasicDocument {
    text: String,
}

impl BasicDocument {
    pub fn new(text: impl Into<String>) -> Self {
        BasicDocument { text: text.into() }
    }
}

impl Document for BasicDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn num_words(&self) -> usize {
        tokens(&self.text, &WORD_PATTERN).len()
    }

    /// Runs between terminators that hold no word, such as the newline
    /// after a final `!`, are not sentences.
    fn num_sentences(&self) -> usize {
        tokens(&self.text, &SENTENCE_PATTERN)
            .into_iter()
            .filter(|sentence| WORD_PATTERN.is_match(sentence))
            .count()
    }

    fn num_syllables(&self) -> usize {
        tokens(&self.text, &WORD_PATTERN)
            .into_iter()
            .map(count_syllables)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str, syllables: usize, words: usize, sentences: usize) {
        let doc = BasicDocument::new(text);
        assert_eq!(doc.num_syllables(), syllables, "syllables in {text:?}");
        assert_eq!(doc.num_words(), words, "words in {text:?}");
        assert_eq!(doc.num_sentences(), sentences, "sentences in {text:?}");
    }

    #[test]
    fn test_counts() {
        check(
            "This is a test.  How many???  Senteeeeeeeeeences are here... there should be 5!  Right?",
            16,
            13,
            5,
        );
        check("", 0, 0, 0);
        check("sentence", 2, 1, 1);
        check("sentences?", 3, 1, 1);
        check("Many sentences. Are here!", 7, 4, 2);
    }

    #[test]
    fn test_trailing_whitespace_is_not_a_sentence() {
        check("One sentence here. Another one!\n", 8, 5, 2);
        check("Hello. ", 2, 1, 1);
        check("Wait...  \n\t", 1, 1, 1);
        check(" \n", 0, 0, 0);
        check("Done. 42!", 1, 1, 1);
    }

    #[test]
    fn test_flesch_score() {
        let doc = BasicDocument::new("sentence");
        // 206.835 - 1.015 * 1 - 84.6 * 2
        assert!((doc.flesch_score() - 36.62).abs() < 1e-9);

        let empty = BasicDocument::new("");
        assert!((empty.flesch_score() - 206.835).abs() < 1e-9);
    }
}
