//! Priority queue for the A* open set.
//!
//! Entries are stored in a min-heap keyed by `(f, seq)`. Lower `f` is
//! popped first; ties are broken by insertion order (FIFO). Since nodes are
//! pushed into the arena in the same order they are queued, `seq` is the
//! node's arena index.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// An entry in the open queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    f: u32,
    /// Arena index of the node. Lower = inserted earlier.
    seq: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Wrapped in Reverse for the BinaryHeap, so this is the natural
        // order: smaller f first, then smaller seq.
        self.f.cmp(&other.f).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of arena indices ordered by `f`, FIFO on ties.
#[derive(Debug, Default)]
pub struct OpenQueue {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl OpenQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Queue the node at arena index `node` with priority `f`.
    pub fn push(&mut self, node: usize, f: u32) {
        self.heap.push(Reverse(Entry { f, seq: node }));
    }

    /// Pop the node with the lowest `f` (ties: lowest index), with its `f`.
    pub fn pop(&mut self) -> Option<(usize, u32)> {
        self.heap.pop().map(|Reverse(e)| (e.seq, e.f))
    }

    /// Lowest `f` currently queued.
    pub fn peek_f(&self) -> Option<u32> {
        self.heap.peek().map(|Reverse(e)| e.f)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_first() {
        let mut q = OpenQueue::new();
        q.push(0, 7);
        q.push(1, 3);
        q.push(2, 5);
        assert_eq!(q.peek_f(), Some(3));
        assert_eq!(q.pop(), Some((1, 3)));
        assert_eq!(q.pop(), Some((2, 5)));
        assert_eq!(q.pop(), Some((0, 7)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn ties_break_on_lower_index() {
        let mut q = OpenQueue::new();
        q.push(4, 2);
        q.push(9, 2);
        q.push(6, 2);
        q.push(1, 3);
        assert_eq!(q.len(), 4);
        assert_eq!(q.pop(), Some((4, 2)));
        assert_eq!(q.pop(), Some((6, 2)));
        assert_eq!(q.pop(), Some((9, 2)));
        assert_eq!(q.pop(), Some((1, 3)));
        assert!(q.is_empty());
    }
}
