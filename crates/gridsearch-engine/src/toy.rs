//! Small problems for exercising the drivers.

use gridsearch_core::{Grid, Point};

use crate::direction::cardinal;
use crate::distance::manhattan;
use crate::traits::{InformedProblem, SearchProblem};

/// Grid of open (`.`) and blocked (`#`) cells.
pub(crate) struct OpenGrid {
    open: Grid<bool>,
    start: Point,
    goal: Point,
}

impl OpenGrid {
    pub(crate) fn parse(s: &str, start: Point, goal: Point) -> Self {
        let rows = s
            .lines()
            .map(|l| l.chars().map(|c| c != '#').collect())
            .collect();
        Self {
            open: Grid::from_rows(rows).unwrap(),
            start,
            goal,
        }
    }
}

impl SearchProblem for OpenGrid {
    type State = Point;

    fn initial(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Point, buf: &mut Vec<(Point, u32)>) {
        buf.extend(cardinal(*state, |n| self.open.at(n) == Some(&true)).map(|n| (n, 1)));
    }
}

impl InformedProblem for OpenGrid {
    fn estimate(&self, state: &Point) -> u32 {
        manhattan(*state, self.goal) as u32
    }
}

/// States `0..n` on a cycle. The goal may lie outside the cycle.
pub(crate) struct Ring {
    n: u32,
    goal: u32,
}

impl Ring {
    pub(crate) fn new(n: u32, goal: u32) -> Self {
        Self { n, goal }
    }
}

impl SearchProblem for Ring {
    type State = u32;

    fn initial(&self) -> u32 {
        0
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &u32, buf: &mut Vec<(u32, u32)>) {
        buf.push(((state + self.n - 1) % self.n, 1));
        buf.push(((state + 1) % self.n, 1));
    }
}

impl InformedProblem for Ring {
    fn estimate(&self, _: &u32) -> u32 {
        0
    }
}
