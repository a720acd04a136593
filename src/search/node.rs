//! Search nodes and the arena that owns them.
//!
//! Nodes live in a flat arena owned by a single search invocation, with
//! parent links stored as indices. Parents are always inserted before
//! their children, so the links form a tree and never a cycle. Node
//! identity for deduplication is the wrapped state alone; `g`, `h`, and
//! `f` are ordering bookkeeping, deliberately excluded from equality.

use crate::puzzle::State;

/// A node in the search tree: a state plus path-cost bookkeeping and a
/// back-reference to the node that generated it.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// The puzzle configuration this node wraps.
    pub state: State,
    /// Arena index of the generating node, `None` for the start node.
    pub parent: Option<usize>,
    /// Transitions taken from the start node.
    pub g: u32,
    /// Heuristic estimate of transitions remaining.
    pub h: u32,
    /// Total priority, `g + h`.
    pub f: u32,
}

impl SearchNode {
    pub fn new(state: State, parent: Option<usize>, g: u32, h: u32) -> Self {
        SearchNode {
            state,
            parent,
            g,
            h,
            f: g + h,
        }
    }
}

/// Flat storage for the nodes created during one search invocation.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Store a node and return its index.
    pub fn insert(&mut self, node: SearchNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The states from the start node to `index`, inclusive.
    ///
    /// Walks parent links to the root and reverses. Pure and
    /// repeatable: calling it twice for the same index yields identical
    /// paths.
    pub fn path_to(&self, index: usize) -> Vec<State> {
        let mut path = Vec::new();
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            path.push(node.state);
            current = node.parent;
        }
        path.reverse();
        path
    }
}
