//! Integration tests for Markov text generation.

use wordsmith::config::ToolkitConfig;
use wordsmith::prelude::*;

const SOURCE: &str = "the cat sat on the mat and the dog sat on the cat";

#[test]
fn test_generated_text_follows_trained_transitions() {
    let mut generator = ListOfListsGenerator::with_seed(2024);
    generator.train(SOURCE);

    let text = generator.generate_text(50);
    let words: Vec<&str> = text.split(' ').collect();
    assert_eq!(words.len(), 50);
    assert_eq!(words[0], "the");

    for pair in words.windows(2) {
        let successors = generator
            .next_words(pair[0])
            .expect("every generated word was seen in training");
        assert!(successors.iter().any(|w| w == pair[1]), "{pair:?}");
    }
}

#[test]
fn test_seed_from_config_is_reproducible() -> Result<()> {
    let config = ToolkitConfig::from_json(r#"{"generator": {"seed": 5}}"#)?;

    let mut first = ListOfListsGenerator::with_config(&config.generator);
    let mut second = ListOfListsGenerator::with_config(&config.generator);
    first.train(SOURCE);
    second.train(SOURCE);

    assert_eq!(first.generate_text(25), second.generate_text(25));
    Ok(())
}
