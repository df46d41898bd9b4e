use crate::limits::AbortReason;
use crate::path::Path;
use crate::searcher::Algorithm;

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S> {
    /// The goal was reached. `visited` counts expanded states; the goal
    /// itself is not expanded.
    Found { path: Path<S>, visited: usize },
    /// The reachable state space was exhausted without meeting the goal.
    NotFound { visited: usize },
    /// A [`SearchLimits`](crate::SearchLimits) bound stopped the search; the
    /// true answer is unknown.
    Aborted { visited: usize, reason: AbortReason },
}

impl<S> Outcome<S> {
    /// Number of distinct states expanded.
    pub fn visited(&self) -> usize {
        match self {
            Self::Found { visited, .. }
            | Self::NotFound { visited }
            | Self::Aborted { visited, .. } => *visited,
        }
    }

    pub fn path(&self) -> Option<&Path<S>> {
        match self {
            Self::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Counters gathered during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States expanded (successors generated). Never counts a state twice.
    pub expanded: usize,
    /// Successor states produced by the problem, duplicates included.
    pub generated: usize,
    /// Dequeued entries discarded because their state was already expanded.
    pub stale: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Outcome of a search plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S> {
    pub algorithm: Algorithm,
    pub outcome: Outcome<S>,
    pub stats: SearchStats,
}

impl<S> SearchResult<S> {
    pub fn visited(&self) -> usize {
        self.outcome.visited()
    }

    pub fn path(&self) -> Option<&Path<S>> {
        self.outcome.path()
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }
}
