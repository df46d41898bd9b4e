//! One-way notifications from a running search.
//!
//! An [`Observer`] sees every state the search dequeues (stale duplicates
//! excluded) and the final path, if any. It only ever receives shared
//! references, so it cannot influence the search.

use crate::path::Path;

/// A dequeued state, reported before its goal test.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a, S> {
    /// 0 for the first reported state, then 1, 2, ...
    pub index: usize,
    pub state: &'a S,
    /// Moves from the start (BFS level, or `g` for A*).
    pub depth: u32,
}

/// Receives visit and path-found events.
pub trait Observer<S> {
    fn on_visit(&mut self, visit: Visit<'_, S>) {
        let _ = visit;
    }

    fn on_path(&mut self, path: &Path<S>) {
        let _ = path;
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S> Observer<S> for NoopObserver {}

impl<S, F> Observer<S> for F
where
    F: FnMut(Visit<'_, S>),
{
    fn on_visit(&mut self, visit: Visit<'_, S>) {
        self(visit)
    }
}

/// Observer that keeps a copy of every visited state and the final path.
#[derive(Debug, Clone)]
pub struct Recorder<S> {
    visits: Vec<(S, u32)>,
    path: Option<Path<S>>,
}

impl<S> Default for Recorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Recorder<S> {
    pub fn new() -> Self {
        Self {
            visits: Vec::new(),
            path: None,
        }
    }

    /// Visited states in visit order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.visits.iter().map(|(s, _)| s)
    }

    /// `(state, depth)` pairs in visit order.
    pub fn visits(&self) -> &[(S, u32)] {
        &self.visits
    }

    /// The reported path, if the search found one.
    pub fn path(&self) -> Option<&Path<S>> {
        self.path.as_ref()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

impl<S: Clone> Observer<S> for Recorder<S> {
    fn on_visit(&mut self, visit: Visit<'_, S>) {
        debug_assert_eq!(visit.index, self.visits.len());
        self.visits.push((visit.state.clone(), visit.depth));
    }

    fn on_path(&mut self, path: &Path<S>) {
        self.path = Some(path.clone());
    }
}
