//! Criterion benchmarks for wordsmith.
//!
//! Covers the trie dictionary, word ladder search and readability scoring.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordsmith::document::{BasicDocument, Document, EfficientDocument};
use wordsmith::spelling::{
    AutoComplete, Dictionary, NearbyWords, TrieDictionary, WordPath, WordPathTree,
};

const SYLLABLES: &[&str] = &[
    "ba", "ce", "di", "fo", "gu", "la", "me", "ni", "po", "ru", "sa", "te", "vi", "wo",
];

/// Generate distinct four-syllable pseudo-words.
fn generate_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut n = i;
            let mut word = String::new();
            for _ in 0..4 {
                word.push_str(SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
            }
            word
        })
        .collect()
}

/// Short four-letter dictionary with plenty of one-letter neighbors.
fn ladder_dictionary() -> TrieDictionary {
    let mut dict = TrieDictionary::new();
    let letters = ['a', 'e', 'i', 'o'];
    for &first in &['b', 'l', 'm', 't'] {
        for &vowel in &letters {
            for &third in &['k', 'm', 'n', 't'] {
                let word: String = [first, vowel, third, 'e'].iter().collect();
                let _ = dict.add_word(&word);
            }
        }
    }
    dict
}

/// Generate a text of `sentences` sentences.
fn generate_text(sentences: usize) -> String {
    let mut text = String::new();
    for i in 0..sentences {
        text.push_str("The quick brown fox jumps over the lazy dog");
        text.push_str(match i % 3 {
            0 => ". ",
            1 => "! ",
            _ => "? ",
        });
    }
    text
}

/// Benchmark trie loading and lookups.
fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    let words = generate_words(10_000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("bulk_load_10k", |b| {
        b.iter(|| {
            let mut dict = TrieDictionary::new();
            for word in &words {
                let _ = dict.add_word(black_box(word));
            }
            black_box(dict)
        })
    });

    let mut dict = TrieDictionary::new();
    for word in &words {
        let _ = dict.add_word(word);
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function("is_word", |b| {
        b.iter(|| black_box(dict.is_word(black_box(&words[5_000]))))
    });

    group.bench_function("predict_completions_10", |b| {
        b.iter(|| black_box(dict.predict_completions(black_box("ba"), 10)))
    });

    group.finish();
}

/// Benchmark word ladder search.
fn bench_word_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_path");
    group.sample_size(20);

    let dict = ladder_dictionary();
    let finder = WordPathTree::new(NearbyWords::new(&dict));

    group.bench_function("find_path_bake_tome", |b| {
        b.iter(|| black_box(finder.find_path(black_box("bake"), black_box("tome"))))
    });

    group.bench_function("suggestions", |b| {
        let nearby = NearbyWords::new(&dict);
        b.iter(|| black_box(nearby.suggestions(black_box("bxke"), 3)))
    });

    group.finish();
}

/// Benchmark readability scoring.
fn bench_readability(c: &mut Criterion) {
    let mut group = c.benchmark_group("readability");
    let text = generate_text(500);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("basic_document", |b| {
        b.iter(|| black_box(BasicDocument::new(black_box(text.as_str())).flesch_score()))
    });

    group.bench_function("efficient_document", |b| {
        b.iter(|| black_box(EfficientDocument::new(black_box(text.as_str())).flesch_score()))
    });

    group.finish();
}

criterion_group!(benches, bench_trie, bench_word_path, bench_readability);
criterion_main!(benches);
