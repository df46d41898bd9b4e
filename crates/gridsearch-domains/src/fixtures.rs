//! Named problem instances.
//!
//! Every fixture is built fresh by its constructor; nothing here is shared
//! or mutable. Coordinates in the docs are `(row, col)`.

use gridsearch_core::Point;

use crate::error::InvalidInput;
use crate::maze::{Maze, MazeProblem};
use crate::puzzle::{Board, PuzzleProblem};

const SAMPLE: [&str; 10] = [
    "##########",
    "      #  #",
    "## # #  ##",
    "#  # #   #",
    "# # # #  #",
    "# # #    #",
    "#   # # ##",
    "# ####   #",
    "#      # #",
    "##########",
];

const NO_ADVANTAGE: [&str; 10] = [
    "##########",
    "## ## #  #",
    "##  ##  ##",
    "# # ##   #",
    "# # # #  #",
    "# # #    #",
    "# # # # ##",
    "#   ##   #",
    "# ###  # #",
    "##########",
];

const HAS_ADVANTAGE: [&str; 10] = [
    "##########",
    "#        #",
    "# # # #  #",
    "# #  #  ##",
    "# # #  # #",
    "# #   #  #",
    "# #      #",
    "# # #  ###",
    "#        #",
    "##########",
];

/// A maze with its start and goal.
#[derive(Debug, Clone)]
pub struct MazeFixture {
    pub name: &'static str,
    pub maze: Maze,
    pub start: Point,
    pub goal: Point,
}

impl MazeFixture {
    pub fn problem(&self) -> Result<MazeProblem<'_>, InvalidInput> {
        MazeProblem::new(&self.maze, self.start, self.goal)
    }
}

/// A puzzle instance.
#[derive(Debug, Clone)]
pub struct PuzzleFixture {
    pub name: &'static str,
    pub initial: Board,
    pub goal: Board,
}

impl PuzzleFixture {
    pub fn problem(&self) -> Result<PuzzleProblem, InvalidInput> {
        PuzzleProblem::new(self.initial.clone(), self.goal.clone())
    }
}

fn maze(rows: &[&str]) -> Maze {
    Maze::parse(&rows.join("\n")).expect("built-in maze is well formed")
}

fn board<const N: usize>(rows: &[[u32; N]]) -> Board {
    Board::from_numbers(rows).expect("built-in board is well formed")
}

/// 10x10 maze, (5, 8) to (4, 5). The shortest route is 4 moves.
pub fn sample_maze() -> MazeFixture {
    MazeFixture {
        name: "sample",
        maze: maze(&SAMPLE),
        start: Point::at(5, 8),
        goal: Point::at(4, 5),
    }
}

/// (8, 1) to (1, 2) through a maze where A* expands exactly as many cells
/// as BFS.
pub fn maze_astar_no_advantage() -> MazeFixture {
    MazeFixture {
        name: "no-advantage",
        maze: maze(&NO_ADVANTAGE),
        start: Point::at(8, 1),
        goal: Point::at(1, 2),
    }
}

/// (8, 1) to (1, 2) through an open maze where the heuristic leads A*
/// straight up the left column.
pub fn maze_astar_has_advantage() -> MazeFixture {
    MazeFixture {
        name: "has-advantage",
        maze: maze(&HAS_ADVANTAGE),
        start: Point::at(8, 1),
        goal: Point::at(1, 2),
    }
}

pub fn mazes() -> Vec<MazeFixture> {
    vec![
        sample_maze(),
        maze_astar_no_advantage(),
        maze_astar_has_advantage(),
    ]
}

/// `1 2 3 / 4 5 6 / 7 8 _`.
pub fn eight_puzzle_goal() -> Board {
    Board::ordered(3, 3)
}

/// The numbered 8-puzzle instances, 1 through 6, in increasing difficulty
/// (optimal lengths 2, 0, 2, 4, 8 and 12 moves). `None` for any other `n`.
pub fn eight_puzzle(n: usize) -> Option<PuzzleFixture> {
    let (name, initial) = match n {
        1 => ("eight-1", board(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]])),
        2 => ("eight-2", board(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]])),
        3 => ("eight-3", board(&[[1, 2, 3], [4, 5, 6], [0, 7, 8]])),
        4 => ("eight-4", board(&[[1, 2, 3], [5, 0, 6], [4, 7, 8]])),
        5 => ("eight-5", board(&[[1, 3, 6], [5, 0, 2], [4, 7, 8]])),
        6 => ("eight-6", board(&[[1, 3, 6], [5, 0, 7], [4, 8, 2]])),
        _ => return None,
    };
    Some(PuzzleFixture {
        name,
        initial,
        goal: eight_puzzle_goal(),
    })
}

/// A 26-move instance. BFS expands over 160,000 boards on it.
pub fn eight_puzzle_hard() -> PuzzleFixture {
    PuzzleFixture {
        name: "eight-hard",
        initial: board(&[[8, 2, 0], [3, 4, 7], [5, 1, 6]]),
        goal: eight_puzzle_goal(),
    }
}

/// 2x2 board with two tiles swapped: same tiles as the goal, but in the
/// other half of the state space.
pub fn two_by_two_unsolvable() -> PuzzleFixture {
    PuzzleFixture {
        name: "two-by-two-unsolvable",
        initial: board(&[[2, 1], [3, 0]]),
        goal: Board::ordered(2, 2),
    }
}

pub fn puzzles() -> Vec<PuzzleFixture> {
    (1..=6)
        .filter_map(eight_puzzle)
        .chain([eight_puzzle_hard(), two_by_two_unsolvable()])
        .collect()
}

/// Look up a maze fixture by name.
pub fn maze_named(name: &str) -> Option<MazeFixture> {
    mazes().into_iter().find(|f| f.name == name)
}

/// Look up a puzzle fixture by name.
pub fn puzzle_named(name: &str) -> Option<PuzzleFixture> {
    puzzles().into_iter().find(|f| f.name == name)
}
