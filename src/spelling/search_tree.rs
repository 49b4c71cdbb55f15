//! Disposable tree of words grown during a single ladder search.
//!
//! Nodes live in an arena owned by [`SearchTree`]. The parent link of a node
//! is a plain [`NodeId`], used only to walk back up and rebuild a path; the
//! tree itself owns every node through the arena.

use std::fmt;

/// Index of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct SearchNode {
    word: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A rooted tree where each child word is one mutation away from its parent.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create a tree holding only the root word.
    pub fn new(root_word: impl Into<String>) -> Self {
        SearchTree {
            nodes: vec![SearchNode {
                word: root_word.into(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, word: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            word: word.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The word stored at `id`.
    pub fn word(&self, id: NodeId) -> &str {
        &self.nodes[id.0].word
    }

    /// Parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Words from the root down to `id`, inclusive.
    pub fn path_to_root(&self, id: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(self.nodes[node.0].word.clone());
            current = self.nodes[node.0].parent;
        }
        path.reverse();
        path
    }
}

impl fmt::Display for SearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            let parent = node
                .parent
                .map(|p| self.nodes[p.0].word.as_str())
                .unwrap_or("-");
            let children: Vec<&str> = node
                .children
                .iter()
                .map(|c| self.nodes[c.0].word.as_str())
                .collect();
            writeln!(f, "{} (parent: {parent}) [{}]", node.word, children.join(", "))?;
        }
        Ok(())
    }
}
