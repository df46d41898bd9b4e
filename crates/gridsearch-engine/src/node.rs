//! Forward-only node arena for A*.
//!
//! Every generated node is appended once and never moved or removed. A
//! node's parent is always an earlier index, so parent chains are acyclic
//! by construction and end at the root (index 0).

/// A search node: a state plus its parent link and costs.
#[derive(Debug, Clone)]
pub struct Node<S> {
    pub state: S,
    /// Arena index of the generating node; `None` for the root.
    pub parent: Option<usize>,
    /// Cost from the start.
    pub g: u32,
    /// Heuristic estimate to the goal.
    pub h: u32,
}

impl<S> Node<S> {
    /// Combined priority `g + h`.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Append-only storage for [`Node`]s, indexed by insertion order.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node and return its index.
    ///
    /// `parent` must refer to a node already in the arena.
    pub fn push(&mut self, state: S, parent: Option<usize>, g: u32, h: u32) -> usize {
        let idx = self.nodes.len();
        debug_assert!(
            parent.is_none_or(|p| p < idx),
            "parent {parent:?} is not older than node {idx}"
        );
        self.nodes.push(Node {
            state,
            parent,
            g,
            h,
        });
        idx
    }

    /// The node at `idx`.
    ///
    /// # Panics
    /// If `idx` was not returned by [`push`](Self::push) on this arena.
    #[inline]
    pub fn get(&self, idx: usize) -> &Node<S> {
        &self.nodes[idx]
    }

    /// Number of nodes ever generated.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indices from `idx` back to the root, following parent links.
    pub fn ancestry(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(idx), move |&i| self.nodes[i].parent)
    }
}
