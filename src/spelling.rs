//! Spelling subsystem: dictionaries, prefix completion, neighbor generation
//! and word ladders.
//!
//! The trie dictionary is populated once and then queried for membership
//! and completions. Ladder searches reach the dictionary only through a
//! [`NeighborSource`], and build a fresh search tree per query.

pub mod autocomplete;
pub mod dictionary;
pub mod levenshtein;
pub mod loader;
pub mod search_tree;
pub mod suggest;
pub mod trie;
pub mod word_path;

// Re-export commonly used types
pub use autocomplete::AutoComplete;
pub use dictionary::{Dictionary, HashSetDictionary, normalize};
pub use levenshtein::{is_ladder, is_one_edit_apart, levenshtein_distance};
pub use loader::{load_dictionary, load_from_reader};
pub use search_tree::{NodeId, SearchTree};
pub use suggest::{NearbyWords, NeighborSource, SuggestionConfig};
pub use trie::{TrieDictionary, TrieNode};
pub use word_path::{PathConfig, WordPath, WordPathTree};
