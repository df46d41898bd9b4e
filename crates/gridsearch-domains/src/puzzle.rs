//! Sliding-tile puzzles on boards of any width and height.
//!
//! A [`Board`] holds distinct labelled tiles and exactly one blank. A move
//! slides the blank one cell left, up, right or down, swapping it with the
//! tile there. The blank's position is cached on the board and carried
//! along by [`Board::slide`], so generating successors never scans the grid.

use std::collections::{HashMap, HashSet};
use std::fmt;

use gridsearch_core::{Grid, Point};
use gridsearch_engine::{Direction, InformedProblem, SearchProblem, manhattan};
use rand::{Rng, RngExt};

use crate::error::InvalidInput;

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Blank,
    Label(u32),
}

impl Tile {
    /// The tile's label, or `None` for the blank.
    pub fn label(self) -> Option<u32> {
        match self {
            Tile::Blank => None,
            Tile::Label(n) => Some(n),
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "_" | "." | "0" => Some(Tile::Blank),
            _ => token.parse().ok().map(Tile::Label),
        }
    }
}

impl From<u32> for Tile {
    /// `0` is the blank, anything else a label.
    fn from(n: u32) -> Self {
        if n == 0 { Tile::Blank } else { Tile::Label(n) }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Blank => f.pad("_"),
            Tile::Label(n) => f.pad(&n.to_string()),
        }
    }
}

/// A sliding-tile board: the search state of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    tiles: Grid<Tile>,
    /// Always the position of the single `Tile::Blank` in `tiles`.
    blank: Point,
}

impl Board {
    /// Validate a tile grid: exactly one blank, no repeated label.
    pub fn new(tiles: Grid<Tile>) -> Result<Self, InvalidInput> {
        let blanks = tiles.count(&Tile::Blank);
        if blanks != 1 {
            return Err(InvalidInput::BlankCount(blanks));
        }
        let mut seen = HashSet::new();
        for t in tiles.cells().iter().filter_map(|t| t.label()) {
            if !seen.insert(t) {
                return Err(InvalidInput::DuplicateTile(t));
            }
        }
        let blank = tiles
            .position(|t| *t == Tile::Blank)
            .ok_or(InvalidInput::BlankCount(0))?;
        Ok(Self { tiles, blank })
    }

    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, InvalidInput> {
        Self::new(Grid::from_rows(rows)?)
    }

    /// Build a board from numbers, `0` standing for the blank.
    pub fn from_numbers<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, InvalidInput> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.as_ref().iter().copied().map(Tile::from).collect())
                .collect(),
        )
    }

    /// Parse whitespace-separated labels, one board row per non-empty line.
    /// `_`, `.` or `0` marks the blank.
    pub fn parse(s: &str) -> Result<Self, InvalidInput> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let y = rows.len() as i32;
            let mut row = Vec::new();
            for (x, token) in line.split_whitespace().enumerate() {
                let tile = Tile::parse(token).ok_or_else(|| InvalidInput::BadTile {
                    token: token.to_string(),
                    pos: Point::new(x as i32, y),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The conventional goal: labels `1..w*h` row-major, blank last.
    pub fn ordered(width: i32, height: i32) -> Self {
        let n = (width.max(1) * height.max(1)) as u32;
        let mut tiles: Grid<Tile> = Grid::new(width.max(1), height.max(1));
        for i in 1..n {
            tiles.set(tiles.point(i as usize - 1), Tile::Label(i));
        }
        let blank = tiles.point(n as usize - 1);
        Self { tiles, blank }
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    /// Position of the blank.
    #[inline]
    pub fn blank(&self) -> Point {
        self.blank
    }

    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    pub fn at(&self, p: Point) -> Option<Tile> {
        self.tiles.at(p).copied()
    }

    /// Labels in row-major order, blank skipped.
    pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
        self.tiles.cells().iter().filter_map(|t| t.label())
    }

    /// A new board with the blank moved one step in `dir`, or `None` if the
    /// blank is on that edge.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let target = dir.step(self.blank);
        if !self.tiles.contains(target) {
            return None;
        }
        let mut next = self.clone();
        next.tiles.swap(self.blank, target);
        next.blank = target;
        Some(next)
    }

    /// Whether `goal` lies in the same half of the state space as `self`.
    ///
    /// Each slide is a transposition that moves the blank one step, so the
    /// parity of the tile permutation between two boards must equal the
    /// parity of the blank's Manhattan distance. On a single row or column
    /// tiles can never pass each other, so there the labels must already be
    /// in goal order. Boards with different shapes or tiles never match.
    pub fn parity_matches(&self, goal: &Board) -> bool {
        if self.tiles.size() != goal.tiles.size() {
            return false;
        }
        if self.width() == 1 || self.height() == 1 {
            return self.labels().eq(goal.labels());
        }
        let goal_index: HashMap<Tile, usize> = goal
            .tiles
            .cells()
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, i))
            .collect();
        let mut perm = Vec::with_capacity(goal_index.len());
        for t in self.tiles.cells() {
            match goal_index.get(t) {
                Some(&i) => perm.push(i),
                None => return false,
            }
        }
        let mut seen = vec![false; perm.len()];
        let mut cycles = 0;
        for start in 0..perm.len() {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                i = perm[i];
            }
        }
        let perm_parity = (perm.len() - cycles) % 2;
        let blank_parity = manhattan(self.blank, goal.blank) as usize % 2;
        perm_parity == blank_parity
    }

    /// Random walk of the blank for `moves` slides, never immediately
    /// undoing the previous slide. The result is always reachable from
    /// `self`.
    pub fn scrambled<R: Rng + ?Sized>(&self, moves: usize, rng: &mut R) -> Board {
        let mut board = self.clone();
        let mut last: Option<Direction> = None;
        let mut options = Vec::with_capacity(4);
        for _ in 0..moves {
            options.clear();
            options.extend(Direction::ALL.into_iter().filter_map(|d| {
                if last == Some(d.reverse()) {
                    return None;
                }
                board.slide(d).map(|b| (d, b))
            }));
            if options.is_empty() {
                // 1xN strips at an end: only the reverse move exists.
                last = None;
                continue;
            }
            let (d, b) = options.swap_remove(rng.random_range(0..options.len()));
            board = b;
            last = Some(d);
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self
            .labels()
            .max()
            .map_or(1, |m| m.to_string().len());
        for (y, row) in self.tiles.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, t) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{t:>cell_width$}")?;
            }
        }
        Ok(())
    }
}

/// Solve query: reach `goal` from `initial` by sliding tiles.
#[derive(Debug, Clone)]
pub struct PuzzleProblem {
    initial: Board,
    goal: Board,
    /// Where each label sits on the goal board.
    goal_locations: HashMap<u32, Point>,
}

impl PuzzleProblem {
    /// Check that both boards have the same shape and the same tiles, and
    /// index the goal for the heuristic.
    pub fn new(initial: Board, goal: Board) -> Result<Self, InvalidInput> {
        if initial.tiles.size() != goal.tiles.size() {
            return Err(InvalidInput::ShapeMismatch {
                initial: initial.tiles.size(),
                goal: goal.tiles.size(),
            });
        }
        let have: HashSet<u32> = initial.labels().collect();
        let want: HashSet<u32> = goal.labels().collect();
        if have != want {
            let mut missing: Vec<u32> = want.difference(&have).copied().collect();
            let mut extra: Vec<u32> = have.difference(&want).copied().collect();
            missing.sort_unstable();
            extra.sort_unstable();
            return Err(InvalidInput::TileMismatch { missing, extra });
        }
        let goal_locations = goal
            .tiles
            .iter()
            .filter_map(|(p, t)| t.label().map(|l| (l, p)))
            .collect();
        let problem = Self {
            initial,
            goal,
            goal_locations,
        };
        log::debug!(
            "puzzle problem {}x{}, initial estimate {}",
            problem.goal.width(),
            problem.goal.height(),
            problem.estimate_to(&problem.initial)
        );
        Ok(problem)
    }

    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    pub fn goal_board(&self) -> &Board {
        &self.goal
    }

    /// Whether the goal is reachable at all (see [`Board::parity_matches`]).
    pub fn is_solvable(&self) -> bool {
        self.initial.parity_matches(&self.goal)
    }

    /// Sum of Manhattan distances of every labelled tile to its goal cell.
    pub fn estimate_to(&self, board: &Board) -> u32 {
        board
            .tiles
            .iter()
            .filter_map(|(p, t)| t.label().map(|l| (p, l)))
            .map(|(p, l)| {
                let target = self.goal_locations.get(&l);
                debug_assert!(target.is_some(), "tile {l} missing from goal");
                target.map_or(0, |&g| manhattan(p, g).unsigned_abs())
            })
            .sum()
    }
}

impl SearchProblem for PuzzleProblem {
    type State = Board;

    fn initial(&self) -> Board {
        self.initial.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Board, buf: &mut Vec<(Board, u32)>) {
        buf.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|d| state.slide(d))
                .map(|b| (b, 1)),
        );
    }
}

impl InformedProblem for PuzzleProblem {
    fn estimate(&self, state: &Board) -> u32 {
        self.estimate_to(state)
    }
}
