use std::collections::HashMap;
use std::hash::Hash;

use crate::node::NodeArena;

/// A solution route, ordered from the initial state to the goal state.
///
/// A path always holds at least one state. Its [`len`](Path::len) is the
/// number of moves, so a search whose start is already the goal yields a
/// path of length 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    states: Vec<S>,
}

impl<S> Path<S> {
    /// Wrap states already in start-to-goal order.
    ///
    /// # Panics
    /// If `states` is empty.
    pub fn new(states: Vec<S>) -> Self {
        assert!(!states.is_empty(), "a path holds at least one state");
        Self { states }
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len() - 1
    }

    /// Whether the path has no moves (start is the goal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.len() == 1
    }

    /// All states, start first.
    #[inline]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn start(&self) -> &S {
        &self.states[0]
    }

    pub fn goal(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    pub fn into_states(self) -> Vec<S> {
        self.states
    }
}

impl<S: Clone + Eq + Hash> Path<S> {
    /// Rebuild a path from a parent map by walking predecessors from `goal`
    /// until the root, whose entry is `None`.
    pub fn from_parent_map(parents: &HashMap<S, Option<S>>, goal: S) -> Self {
        let mut states = Vec::new();
        let mut cur = Some(goal);
        while let Some(s) = cur {
            cur = parents.get(&s).cloned().flatten();
            states.push(s);
            debug_assert!(states.len() <= parents.len() + 1, "cycle in parent map");
        }
        states.reverse();
        Self { states }
    }
}

impl<S: Clone> Path<S> {
    /// Rebuild a path by following arena parent links from node `idx`.
    pub fn from_arena(arena: &NodeArena<S>, idx: usize) -> Self {
        let mut states: Vec<S> = arena
            .ancestry(idx)
            .map(|i| arena.get(i).state.clone())
            .collect();
        states.reverse();
        Self { states }
    }
}

impl<'a, S> IntoIterator for &'a Path<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
