//! Word ladder search.
//!
//! [`WordPathTree`] connects two words through a chain of dictionary words,
//! each one mutation (substitution, insertion or deletion) away from the
//! previous one. It grows a [`SearchTree`] breadth-first and marks a word as
//! visited the moment it is first discovered, so the first time the goal is
//! reached it is reached by a shortest chain.

use std::collections::VecDeque;

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsmithError};
use crate::spelling::dictionary::normalize;
use crate::spelling::search_tree::SearchTree;
use crate::spelling::suggest::NeighborSource;

/// Finds ladders between two words.
pub trait WordPath {
    /// Return a shortest ladder from `start` to `goal` inclusive, or `None`
    /// if the two words are not connected.
    fn find_path(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>>;
}

/// Configuration for the ladder search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Upper bound on how many tree nodes a single query may expand.
    ///
    /// This only guards against runaway searches on huge dictionaries; it is
    /// set high enough that ordinary queries never hit it.
    pub max_expansions: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            max_expansions: 2000,
        }
    }
}

/// Breadth-first ladder search driven by a [`NeighborSource`].
pub struct WordPathTree<N: NeighborSource> {
    neighbors: N,
    config: PathConfig,
}

impl<N: NeighborSource> WordPathTree<N> {
    /// Create a ladder finder with the default configuration.
    pub fn new(neighbors: N) -> Self {
        WordPathTree {
            neighbors,
            config: PathConfig::default(),
        }
    }

    /// Create a ladder finder with custom configuration.
    pub fn with_config(neighbors: N, config: PathConfig) -> Self {
        WordPathTree { neighbors, config }
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: PathConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Run the search and hand back the tree that was grown alongside the
    /// result. Mostly useful for inspecting how far a query explored.
    pub fn search(&self, start: &str, goal: &str) -> Result<(SearchTree, Option<Vec<String>>)> {
        let start = checked_word("start", start)?;
        let goal = checked_word("goal", goal)?;

        let mut tree = SearchTree::new(start.clone());
        if start == goal {
            return Ok((tree, Some(vec![start])));
        }

        let mut visited = AHashSet::new();
        visited.insert(start);
        let mut queue = VecDeque::from([tree.root()]);
        let mut expansions = 0;

        while let Some(current) = queue.pop_front() {
            if expansions >= self.config.max_expansions {
                debug!(
                    "ladder search to {goal:?} stopped after {expansions} expansions ({} nodes)",
                    tree.len()
                );
                return Ok((tree, None));
            }
            expansions += 1;

            for candidate in self.neighbors.distance_one(tree.word(current), true) {
                let candidate = normalize(&candidate);
                if !visited.insert(candidate.clone()) {
                    continue;
                }

                let child = tree.add_child(current, candidate);
                if tree.word(child) == goal {
                    let path = tree.path_to_root(child);
                    debug!(
                        "found ladder of {} words after {expansions} expansions",
                        path.len()
                    );
                    return Ok((tree, Some(path)));
                }
                queue.push_back(child);
            }
        }

        debug!("no ladder to {goal:?}; explored {} words", tree.len());
        Ok((tree, None))
    }
}

impl<N: NeighborSource> WordPath for WordPathTree<N> {
    fn find_path(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
        self.search(start, goal).map(|(_, path)| path)
    }
}

fn checked_word(role: &str, word: &str) -> Result<String> {
    if word.is_empty() {
        return Err(WordsmithError::invalid_argument(format!(
            "{role} word must not be empty"
        )));
    }
    Ok(normalize(word))
}
