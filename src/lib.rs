//! # Wordsmith
//!
//! A small text-analysis toolkit.
//!
//! ## Features
//!
//! - Trie-backed dictionary with prefix completion
//! - Word ladders between dictionary words via breadth-first search
//! - Spelling suggestions from single-character mutations
//! - Flesch readability scoring
//! - Markov chain text generation

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod spelling;
pub mod textgen;

pub mod prelude {
    pub use crate::document::{BasicDocument, Document, EfficientDocument};
    pub use crate::error::{Result, WordsmithError};
    pub use crate::spelling::{
        AutoComplete, Dictionary, NearbyWords, TrieDictionary, WordPath, WordPathTree,
    };
    pub use crate::textgen::{ListOfListsGenerator, MarkovTextGenerator};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
