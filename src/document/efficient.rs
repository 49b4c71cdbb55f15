//! Document that counts everything once, at construction.

use crate::document::{Document, WORD_OR_TERMINATOR_PATTERN, count_syllables, tokens};

/// A document whose counts are computed in one pass when it is created.
#[derive(Debug, Clone)]
pub struct EfficientDocument {
    text: String,
    num_words: usize,
    num_sentences: usize,
    num_syllables: usize,
}

impl EfficientDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let mut doc = EfficientDocument {
            text: text.into(),
            num_words: 0,
            num_sentences: 0,
            num_syllables: 0,
        };
        doc.process_text();
        doc
    }

    fn process_text(&mut self) {
        let mut in_sentence = false;

        for token in tokens(&self.text, &WORD_OR_TERMINATOR_PATTERN) {
            if is_word(token) {
                self.num_words += 1;
                self.num_syllables += count_syllables(token);
                in_sentence = true;
            } else if in_sentence {
                self.num_sentences += 1;
                in_sentence = false;
            }
        }

        // Trailing words without a terminator still form a sentence.
        if in_sentence {
            self.num_sentences += 1;
        }
    }
}

fn is_word(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_alphabetic())
}

impl Document for EfficientDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn num_words(&self) -> usize {
        self.num_words
    }

    fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    fn num_syllables(&self) -> usize {
        self.num_syllables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BasicDocument;

    #[test]
    fn test_counts() {
        let doc = EfficientDocument::new(
            "This is a test.  How many???  Senteeeeeeeeeences are here... there should be 5!  Right?",
        );
        assert_eq!(doc.num_syllables(), 16);
        assert_eq!(doc.num_words(), 13);
        assert_eq!(doc.num_sentences(), 5);
    }

    #[test]
    fn test_trailing_sentence_without_terminator() {
        let doc = EfficientDocument::new("One sentence. Two sentences");
        assert_eq!(doc.num_sentences(), 2);
        assert_eq!(doc.num_words(), 4);
    }

    #[test]
    fn test_empty_text() {
        let doc = EfficientDocument::new("");
        assert_eq!(doc.num_words(), 0);
        assert_eq!(doc.num_sentences(), 0);
        assert_eq!(doc.num_syllables(), 0);
    }

    #[test]
    fn test_agrees_with_basic_document() {
        let texts = [
            "sentence",
            "Many sentences. Are here!",
            "Lorem ipsum dolor sit amet, qui ex choro quodsi moderatius, nam dolores explicari forensibus ad.",
            "I really can't stand it. Why? Because... it's too loud!",
            "One sentence here. Another one!\n",
            "Hello. ",
            "Trailing lines?\n\n  \n",
            "Numbers only after. 42!",
        ];
        for text in texts {
            let basic = BasicDocument::new(text);
            let efficient = EfficientDocument::new(text);
            assert_eq!(basic.num_words(), efficient.num_words(), "{text:?}");
            assert_eq!(basic.num_syllables(), efficient.num_syllables(), "{text:?}");
            assert_eq!(basic.num_sentences(), efficient.num_sentences(), "{text:?}");
            assert!((basic.flesch_score() - efficient.flesch_score()).abs() < 1e-9);
        }
    }
}
