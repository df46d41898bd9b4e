use std::fmt;
use std::str::FromStr;

use crate::limits::{AbortReason, SearchLimits};
use crate::observer::{NoopObserver, Observer};
use crate::path::Path;
use crate::result::{Outcome, SearchResult, SearchStats};
use crate::traits::InformedProblem;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uninformed breadth-first search.
    Bfs,
    /// Best-first search on `g + h`.
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "bfs"),
            Self::AStar => write!(f, "astar"),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d} (expected bfs or astar)", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "astar" | "a*" | "a_star" | "a-star" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Runs searches under a fixed set of [`SearchLimits`].
///
/// The BFS and A* drivers live in their own modules as `impl Searcher`
/// blocks. Each run owns its frontier and visited structures; nothing is
/// shared between runs, so repeated runs on the same input return the same
/// result.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    limits: SearchLimits,
}

impl Searcher {
    /// Create a searcher with the given limits.
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// The limits applied to every run.
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Run `algorithm` on `problem`.
    pub fn run<P, O>(&self, problem: &P, algorithm: Algorithm, observer: &mut O) -> SearchResult<P::State>
    where
        P: InformedProblem + ?Sized,
        O: Observer<P::State> + ?Sized,
    {
        match algorithm {
            Algorithm::Bfs => self.bfs(problem, observer),
            Algorithm::AStar => self.astar(problem, observer),
        }
    }

    pub(crate) fn check(&self, expanded: usize, frontier: usize) -> Option<AbortReason> {
        self.limits.exceeded(expanded, frontier)
    }

    pub(crate) fn found<S, O>(
        algorithm: Algorithm,
        path: Path<S>,
        stats: SearchStats,
        observer: &mut O,
    ) -> SearchResult<S>
    where
        O: Observer<S> + ?Sized,
    {
        observer.on_path(&path);
        log::debug!(
            "{algorithm}: found path of {} moves after {} expansions ({} generated, {} stale)",
            path.len(),
            stats.expanded,
            stats.generated,
            stats.stale
        );
        SearchResult {
            algorithm,
            outcome: Outcome::Found {
                path,
                visited: stats.expanded,
            },
            stats,
        }
    }

    pub(crate) fn not_found<S>(algorithm: Algorithm, stats: SearchStats) -> SearchResult<S> {
        log::debug!(
            "{algorithm}: state space exhausted after {} expansions",
            stats.expanded
        );
        SearchResult {
            algorithm,
            outcome: Outcome::NotFound {
                visited: stats.expanded,
            },
            stats,
        }
    }

    pub(crate) fn aborted<S>(
        algorithm: Algorithm,
        reason: AbortReason,
        stats: SearchStats,
    ) -> SearchResult<S> {
        log::debug!(
            "{algorithm}: aborted ({reason}) after {} expansions",
            stats.expanded
        );
        SearchResult {
            algorithm,
            outcome: Outcome::Aborted {
                visited: stats.expanded,
                reason,
            },
            stats,
        }
    }
}

/// Run `algorithm` on `problem` with no limits and no observer.
pub fn search<P>(problem: &P, algorithm: Algorithm) -> SearchResult<P::State>
where
    P: InformedProblem + ?Sized,
{
    Searcher::default().run(problem, algorithm, &mut NoopObserver)
}
