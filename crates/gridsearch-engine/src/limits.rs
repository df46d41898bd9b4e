//! Early-abort controls for a search run.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag that asks a running search to stop.
///
/// Clones share the same flag. The search polls it once per expansion, so
/// cancelling from an observer callback or from another thread takes effect
/// before the next state is expanded.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Why a search stopped before reaching a conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbortReason {
    /// The [`CancelToken`] was triggered.
    Cancelled,
    /// More states would have been expanded than `max_expansions` allows.
    ExpansionBudget,
    /// The frontier grew beyond `max_frontier`.
    FrontierBudget,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::ExpansionBudget => write!(f, "expansion budget exhausted"),
            Self::FrontierBudget => write!(f, "frontier budget exhausted"),
        }
    }
}

/// Resource bounds for one search run. The default is unlimited.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Maximum number of states to expand.
    pub max_expansions: Option<usize>,
    /// Maximum number of queued states.
    pub max_frontier: Option<usize>,
    /// External stop signal.
    pub cancel: Option<CancelToken>,
}

impl SearchLimits {
    /// No bounds at all.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    pub fn with_max_frontier(mut self, n: usize) -> Self {
        self.max_frontier = Some(n);
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Check the bounds before expanding one more state, given how many have
    /// been expanded so far and how many are queued.
    pub(crate) fn exceeded(&self, expanded: usize, frontier: usize) -> Option<AbortReason> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(AbortReason::Cancelled);
        }
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return Some(AbortReason::ExpansionBudget);
        }
        if self.max_frontier.is_some_and(|max| frontier > max) {
            return Some(AbortReason::FrontierBudget);
        }
        None
    }
}
