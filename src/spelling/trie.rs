//! Trie-backed dictionary with ranked prefix completion.
//!
//! Each [`TrieNode`] stores the text accumulated along the path from the
//! root, so a completion can be reported straight from the node that ends it
//! without rebuilding the string. Children are kept in a `BTreeMap`, which
//! makes child enumeration (and therefore the order of equal-length
//! completions) deterministic.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};

use log::debug;

use crate::error::Result;
use crate::spelling::autocomplete::AutoComplete;
use crate::spelling::dictionary::{Dictionary, normalize, normalize_checked};

/// A single node of the trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    text: String,
    ends_word: bool,
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    fn with_text(text: String) -> Self {
        TrieNode {
            text,
            ends_word: false,
            children: BTreeMap::new(),
        }
    }

    /// The prefix spelled by the edges from the root to this node.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this node's prefix is itself a stored word.
    pub fn ends_word(&self) -> bool {
        self.ends_word
    }

    /// The child reached by `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Characters that have an outgoing edge from this node, in sorted order.
    pub fn next_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    /// Children in sorted edge order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        match self.children.entry(ch) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut text = String::with_capacity(self.text.len() + ch.len_utf8());
                text.push_str(&self.text);
                text.push(ch);
                entry.insert(TrieNode::with_text(text))
            }
        }
    }
}

/// A dictionary stored as a character trie.
///
/// ```
/// use wordsmith::spelling::{AutoComplete, Dictionary, TrieDictionary};
///
/// let mut dict = TrieDictionary::new();
/// dict.add_words(["be", "bee", "beet", "bed"]).unwrap();
///
/// assert!(dict.is_word("BEE"));
/// assert!(!dict.is_word("beetle"));
/// let completions = dict.predict_completions("be", 2);
/// assert_eq!(completions[0], "be");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrieDictionary {
    root: TrieNode,
    size: usize,
}

impl TrieDictionary {
    /// Create a new empty trie.
    pub fn new() -> Self {
        TrieDictionary {
            root: TrieNode::default(),
            size: 0,
        }
    }

    /// The root node. Its text is always empty.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Follow `stem` edge by edge from the root. `stem` must already be
    /// normalized.
    fn find_stem(&self, stem: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in stem.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// All stored words in pre-order (sorted) order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.size);
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.ends_word {
                words.push(node.text.clone());
            }
            // Reverse so the smallest edge is popped first.
            stack.extend(node.children.values().rev());
        }
        words
    }
}

impl Dictionary for TrieDictionary {
    fn add_word(&mut self, word: &str) -> Result<bool> {
        let word = normalize_checked(word)?;

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }

        if node.ends_word {
            return Ok(false);
        }
        node.ends_word = true;
        self.size += 1;
        Ok(true)
    }

    fn is_word(&self, word: &str) -> bool {
        self.find_stem(&normalize(word))
            .map(TrieNode::ends_word)
            .unwrap_or(false)
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl AutoComplete for TrieDictionary {
    fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String> {
        let mut completions = Vec::new();
        if num_completions == 0 {
            return completions;
        }

        let stem = normalize(prefix);
        let Some(stem_node) = self.find_stem(&stem) else {
            debug!("stem {stem:?} not found in trie");
            return completions;
        };

        // Breadth-first from the stem yields words in non-decreasing length.
        let mut queue = VecDeque::new();
        queue.push_back(stem_node);

        while let Some(node) = queue.pop_front() {
            if node.ends_word {
                completions.push(node.text.clone());
                if completions.len() >= num_completions {
                    break;
                }
            }
            queue.extend(node.children());
        }

        completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordsmithError;

    fn small_dict() -> TrieDictionary {
        let mut dict = TrieDictionary::new();
        dict.add_words([
            "a", "e", "i", "o", "u", "test", "testing", "testcases", "testone", "tester",
            "testers", "testcase", "subtest", "help", "hell", "hello", "helping",
        ])
        .unwrap();
        dict
    }

    #[test]
    fn test_add_and_lookup() {
        let mut dict = TrieDictionary::new();

        assert!(!dict.is_word("hello"));
        assert_eq!(dict.size(), 0);

        assert!(dict.add_word("hello").unwrap());
        assert!(dict.is_word("hello"));
        assert_eq!(dict.size(), 1);

        assert!(!dict.is_word("hell"));
        assert!(!dict.is_word("hellos"));
        assert!(!dict.is_word(""));
    }

    #[test]
    fn test_duplicate_insert_returns_false() {
        let mut dict = TrieDictionary::new();

        assert!(dict.add_word("Hello").unwrap());
        assert!(!dict.add_word("hello").unwrap());
        assert!(!dict.add_word("HELLO").unwrap());
        assert_eq!(dict.size(), 1);
    }

    #[test]
    fn test_prefix_of_existing_word_can_be_added() {
        let mut dict = TrieDictionary::new();
        dict.add_word("hello").unwrap();
        let nodes_before = dict.node_count();

        assert!(dict.add_word("hell").unwrap());
        assert!(dict.is_word("hell"));
        assert_eq!(dict.size(), 2);
        // No new nodes, only a flag flip.
        assert_eq!(dict.node_count(), nodes_before);
    }

    #[test]
    fn test_node_text_is_accumulated_prefix() {
        let mut dict = TrieDictionary::new();
        dict.add_word("bed").unwrap();

        assert_eq!(dict.root().text(), "");
        let b = dict.root().child('b').unwrap();
        assert_eq!(b.text(), "b");
        let be = b.child('e').unwrap();
        assert_eq!(be.text(), "be");
        assert!(!be.ends_word());
        let bed = be.child('d').unwrap();
        assert_eq!(bed.text(), "bed");
        assert!(bed.ends_word());
    }

    #[test]
    fn test_next_chars_follow_sorted_edges() {
        let mut dict = TrieDictionary::new();
        dict.add_words(["cat", "bee", "be", "bed"]).unwrap();

        let root = dict.root();
        assert_eq!(root.next_chars().collect::<Vec<_>>(), vec!['b', 'c']);
        let be = root.child('b').and_then(|b| b.child('e')).unwrap();
        assert_eq!(be.next_chars().collect::<String>(), "de");
        for ch in be.next_chars() {
            assert!(be.child(ch).is_some());
        }
        let bed = be.child('d').unwrap();
        assert_eq!(bed.next_chars().count(), 0);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let mut dict = TrieDictionary::new();
        let err = dict.add_word("").unwrap_err();
        assert!(matches!(err, WordsmithError::InvalidArgument(_)));
        assert_eq!(dict.size(), 0);
    }

    #[test]
    fn test_size_tracks_words_not_nodes() {
        let dict = small_dict();
        assert_eq!(dict.size(), 17);
        assert!(dict.node_count() > dict.size());
    }

    #[test]
    fn test_completions_missing_stem() {
        let dict = small_dict();
        assert!(dict.predict_completions("x", 4).is_empty());
        assert!(dict.predict_completions("testz", 4).is_empty());
    }

    #[test]
    fn test_completions_include_prefix_word_first() {
        let dict = small_dict();

        let completions = dict.predict_completions("test", 2);
        assert_eq!(completions, vec!["test", "tester"]);
    }

    #[test]
    fn test_completions_are_length_monotonic() {
        let dict = small_dict();

        let completions = dict.predict_completions("test", 10);
        assert_eq!(completions.len(), 7);
        assert!(completions.windows(2).all(|w| w[0].len() <= w[1].len()));
        assert_eq!(completions.last().map(String::as_str), Some("testcases"));
        assert!(completions.iter().all(|w| dict.is_word(w)));
    }

    #[test]
    fn test_completions_from_non_word_stem() {
        let dict = small_dict();

        let completions = dict.predict_completions("hel", 2);
        assert_eq!(completions, vec!["hell", "help"]);
    }

    #[test]
    fn test_completions_are_case_insensitive() {
        let dict = small_dict();
        assert_eq!(
            dict.predict_completions("HELL", 2),
            dict.predict_completions("hell", 2)
        );
    }

    #[test]
    fn test_zero_completions_requested() {
        let dict = small_dict();
        assert!(dict.predict_completions("test", 0).is_empty());
    }

    #[test]
    fn test_empty_prefix_walks_whole_trie() {
        let dict = small_dict();
        let completions = dict.predict_completions("", 5);
        assert_eq!(completions, vec!["a", "e", "i", "o", "u"]);
    }

    #[test]
    fn test_words_are_sorted() {
        let mut dict = TrieDictionary::new();
        dict.add_words(["bed", "be", "beet", "bee", "ant"]).unwrap();
        assert_eq!(dict.words(), vec!["ant", "be", "bed", "bee", "beet"]);
    }
}
