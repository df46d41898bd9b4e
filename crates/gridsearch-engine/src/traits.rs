use std::hash::Hash;

/// Minimal search interface: a start state, a goal test, and successor
/// generation. Enough for breadth-first search.
pub trait SearchProblem {
    /// A search state. Must be cheap enough to clone into the frontier and
    /// the visited set; equality and hashing identify duplicates.
    type State: Clone + Eq + Hash;

    /// The state the search starts from.
    fn initial(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Append `(neighbor, move_cost)` pairs of `state` into `buf`, in a fixed
    /// order. The caller clears `buf` before calling. Must not modify
    /// `state`; a dead end simply appends nothing.
    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, u32)>);
}

/// Search problem with an admissible heuristic. Required for A*.
pub trait InformedProblem: SearchProblem {
    /// Estimated remaining cost from `state` to the goal.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, state: &Self::State) -> u32;
}

impl<P: SearchProblem + ?Sized> SearchProblem for &P {
    type State = P::State;

    fn initial(&self) -> Self::State {
        (**self).initial()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, u32)>) {
        (**self).successors(state, buf)
    }
}

impl<P: InformedProblem + ?Sized> InformedProblem for &P {
    fn estimate(&self, state: &Self::State) -> u32 {
        (**self).estimate(state)
    }
}
