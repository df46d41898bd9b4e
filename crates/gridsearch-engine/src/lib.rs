//! State-space search over generic problems.
//!
//! This crate provides the two drivers used by the gridsearch domains:
//!
//! - **BFS** uninformed breadth-first search ([`Searcher::bfs`])
//! - **A\*** best-first search on `g + h` ([`Searcher::astar`])
//!
//! Both run through [`Searcher`], which applies [`SearchLimits`] (expansion
//! and frontier budgets, external cancellation) and reports every dequeued
//! state to an [`Observer`]. Results come back as a [`SearchResult`] whose
//! [`Outcome`] is `Found`, `NotFound` or `Aborted`; none of these is an
//! error.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`SearchProblem`] | BFS |
//! | [`InformedProblem`] : [`SearchProblem`] | A* |
//!
//! # Determinism
//!
//! Successors are expanded in the order the problem appends them (the grid
//! domains use [`Direction::ALL`]). A* breaks `f` ties by generation order.
//! Paths are returned start first.

mod astar;
mod bfs;
mod direction;
mod distance;
mod limits;
mod node;
mod observer;
mod path;
mod queue;
mod result;
mod searcher;
mod traits;

#[cfg(test)]
mod toy;

pub use direction::{Direction, cardinal};
pub use distance::manhattan;
pub use limits::{AbortReason, CancelToken, SearchLimits};
pub use node::{Node, NodeArena};
pub use observer::{NoopObserver, Observer, Recorder, Visit};
pub use path::Path;
pub use queue::OpenQueue;
pub use result::{Outcome, SearchResult, SearchStats};
pub use searcher::{Algorithm, Searcher, UnknownAlgorithm, search};
pub use traits::{InformedProblem, SearchProblem};
