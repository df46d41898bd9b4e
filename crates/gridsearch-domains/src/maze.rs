//! Grid mazes: walls, open cells, and a start/goal pair.
//!
//! A maze is parsed from ASCII art, one character per cell:
//!
//! | Char | Cell |
//! |---|---|
//! | `#` | [`MazeCell::Wall`] |
//! | ` ` or `.` | [`MazeCell::Open`] |
//! | `V` or `o` | [`MazeCell::Visited`] |
//!
//! Only `Wall` blocks movement. `Visited` is an annotation for renderers
//! (see [`Maze::annotate`]); the search keeps its own visited set and never
//! writes into the maze.

use std::fmt;

use gridsearch_core::{Grid, Point};
use gridsearch_engine::{InformedProblem, SearchProblem, cardinal, manhattan};

use crate::error::{Endpoint, InvalidInput};

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeCell {
    Wall,
    #[default]
    Open,
    Visited,
}

impl MazeCell {
    /// Whether a move may enter this cell.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != MazeCell::Wall
    }

    /// Parse a layout character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            ' ' | '.' => Some(Self::Open),
            'V' | 'o' => Some(Self::Visited),
            _ => None,
        }
    }

    /// Layout character of this cell.
    pub fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Visited => 'o',
        }
    }
}

/// A rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    grid: Grid<MazeCell>,
}

impl Maze {
    /// Wrap an existing grid.
    pub fn new(grid: Grid<MazeCell>) -> Self {
        Self { grid }
    }

    /// Build a maze from rows of cells.
    pub fn from_rows(rows: Vec<Vec<MazeCell>>) -> Result<Self, InvalidInput> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    /// Parse an ASCII layout.
    ///
    /// Blank lines before the first and after the last row are ignored.
    /// Spaces are significant inside rows, so rows are not trimmed; a
    /// trailing `\r` is dropped.
    pub fn parse(s: &str) -> Result<Self, InvalidInput> {
        let mut rows = Vec::new();
        for (y, line) in s.trim_matches('\n').lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let cell = MazeCell::from_char(ch).ok_or(InvalidInput::BadCell {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The underlying cell grid.
    pub fn grid(&self) -> &Grid<MazeCell> {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Cell at `p`, or `None` outside the maze.
    pub fn cell(&self, p: Point) -> Option<MazeCell> {
        self.grid.at(p).copied()
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_open(&self, p: Point) -> bool {
        self.cell(p).is_some_and(MazeCell::is_passable)
    }

    /// Passable neighbors of `p`, in expansion order (left, up, right, down).
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        cardinal(p, move |n| self.is_open(n))
    }

    /// A copy of the maze with every given non-wall cell tagged `Visited`.
    pub fn annotate<'a>(&self, visited: impl IntoIterator<Item = &'a Point>) -> Maze {
        let mut grid = self.grid.clone();
        for &p in visited {
            if self.is_open(p) {
                grid.set(p, MazeCell::Visited);
            }
        }
        Maze { grid }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.to_char())?;
            }
        }
        Ok(())
    }
}

/// Route-finding query on a [`Maze`]. States are cell coordinates.
#[derive(Debug, Clone)]
pub struct MazeProblem<'m> {
    maze: &'m Maze,
    start: Point,
    goal: Point,
}

impl<'m> MazeProblem<'m> {
    /// Validate `start` and `goal` against `maze`.
    ///
    /// Both must lie inside the grid and on a passable cell.
    pub fn new(maze: &'m Maze, start: Point, goal: Point) -> Result<Self, InvalidInput> {
        for (what, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !maze.grid.contains(pos) {
                return Err(InvalidInput::OutOfBounds {
                    what,
                    pos,
                    bounds: maze.grid.bounds(),
                });
            }
            if !maze.is_open(pos) {
                return Err(InvalidInput::Blocked { what, pos });
            }
        }
        log::debug!(
            "maze problem {}x{} from {start} to {goal}",
            maze.width(),
            maze.height()
        );
        Ok(Self { maze, start, goal })
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Manhattan distance from `p` to the goal.
    pub fn estimate_to(&self, p: Point) -> u32 {
        manhattan(p, self.goal).unsigned_abs()
    }
}

impl SearchProblem for MazeProblem<'_> {
    type State = Point;

    fn initial(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Point, buf: &mut Vec<(Point, u32)>) {
        for n in self.maze.neighbors(*state) {
            debug_assert!(self.maze.grid.contains(n), "successor {n} out of bounds");
            buf.push((n, 1));
        }
    }
}

impl InformedProblem for MazeProblem<'_> {
    fn estimate(&self, state: &Point) -> u32 {
        self.estimate_to(*state)
    }
}
