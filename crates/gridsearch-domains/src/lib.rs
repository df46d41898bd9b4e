//! Problem domains for the gridsearch engine.
//!
//! - [`maze`]: route finding on a wall/open grid, states are [`Point`]s.
//! - [`puzzle`]: sliding-tile puzzles of any shape, states are [`Board`]s.
//! - [`fixtures`]: named instances of both.
//!
//! Inputs are validated when a problem is built; anything malformed is an
//! [`InvalidInput`] and no search runs. The [`solve_maze`] and
//! [`solve_puzzle`] helpers combine validation and search.
//!
//! [`Point`]: gridsearch_core::Point

pub mod error;
pub mod fixtures;
pub mod maze;
pub mod puzzle;
mod solve;

pub use error::{Endpoint, InvalidInput};
pub use maze::{Maze, MazeCell, MazeProblem};
pub use puzzle::{Board, PuzzleProblem, Tile};
pub use solve::{solve_maze, solve_maze_observed, solve_puzzle, solve_puzzle_observed};
