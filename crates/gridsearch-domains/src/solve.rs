//! One-call entry points: validate the input, then search.

use gridsearch_core::Point;
use gridsearch_engine::{Algorithm, NoopObserver, Observer, SearchLimits, SearchResult, Searcher};

use crate::error::InvalidInput;
use crate::maze::{Maze, MazeProblem};
use crate::puzzle::{Board, PuzzleProblem};

/// Find a route through `maze` from `start` to `goal`.
///
/// Fails only on invalid endpoints; an unreachable goal or an exhausted
/// budget is reported in the returned [`SearchResult`].
pub fn solve_maze(
    maze: &Maze,
    start: Point,
    goal: Point,
    algorithm: Algorithm,
    limits: SearchLimits,
) -> Result<SearchResult<Point>, InvalidInput> {
    solve_maze_observed(maze, start, goal, algorithm, limits, &mut NoopObserver)
}

/// [`solve_maze`], reporting every visited cell to `observer`.
pub fn solve_maze_observed<O>(
    maze: &Maze,
    start: Point,
    goal: Point,
    algorithm: Algorithm,
    limits: SearchLimits,
    observer: &mut O,
) -> Result<SearchResult<Point>, InvalidInput>
where
    O: Observer<Point> + ?Sized,
{
    let problem = MazeProblem::new(maze, start, goal)?;
    Ok(Searcher::new(limits).run(&problem, algorithm, observer))
}

/// Slide tiles from `initial` until the board equals `goal`.
///
/// Boards with different shapes or tiles are rejected. Same-tile boards in
/// different parity classes are searched anyway and come back as
/// `NotFound` once the reachable half of the state space is exhausted;
/// check [`Board::parity_matches`] first to avoid that cost.
pub fn solve_puzzle(
    initial: &Board,
    goal: &Board,
    algorithm: Algorithm,
    limits: SearchLimits,
) -> Result<SearchResult<Board>, InvalidInput> {
    solve_puzzle_observed(initial, goal, algorithm, limits, &mut NoopObserver)
}

/// [`solve_puzzle`], reporting every visited board to `observer`.
pub fn solve_puzzle_observed<O>(
    initial: &Board,
    goal: &Board,
    algorithm: Algorithm,
    limits: SearchLimits,
    observer: &mut O,
) -> Result<SearchResult<Board>, InvalidInput>
where
    O: Observer<Board> + ?Sized,
{
    let problem = PuzzleProblem::new(initial.clone(), goal.clone())?;
    Ok(Searcher::new(limits).run(&problem, algorithm, observer))
}
