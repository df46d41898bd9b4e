use std::fmt;

use gridsearch_core::{GridError, Point, Range};

/// Which end of a maze query a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// A problem instance rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The rows do not form a non-empty rectangle.
    Grid(GridError),
    /// A maze layout contains a character with no cell meaning.
    BadCell { ch: char, pos: Point },
    /// A puzzle layout contains a token that is neither a label nor a blank.
    BadTile { token: String, pos: Point },
    /// A maze coordinate lies outside the grid.
    OutOfBounds {
        what: Endpoint,
        pos: Point,
        bounds: Range,
    },
    /// A maze coordinate lies on a wall.
    Blocked { what: Endpoint, pos: Point },
    /// A board must hold exactly one blank.
    BlankCount(usize),
    /// A tile label appears more than once on a board.
    DuplicateTile(u32),
    /// Initial and goal boards differ in size (width, height).
    ShapeMismatch { initial: Point, goal: Point },
    /// Initial and goal boards hold different tile labels.
    TileMismatch { missing: Vec<u32>, extra: Vec<u32> },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::BadCell { ch, pos } => {
                write!(f, "maze: invalid cell \u{201c}{ch}\u{201d} at row {}, column {}", pos.y, pos.x)
            }
            Self::BadTile { token, pos } => {
                write!(f, "puzzle: invalid tile \u{201c}{token}\u{201d} at row {}, column {}", pos.y, pos.x)
            }
            Self::OutOfBounds { what, pos, bounds } => write!(
                f,
                "maze: {what} (row {}, column {}) is outside {}x{} grid",
                pos.y,
                pos.x,
                bounds.height(),
                bounds.width()
            ),
            Self::Blocked { what, pos } => {
                write!(f, "maze: {what} (row {}, column {}) is a wall", pos.y, pos.x)
            }
            Self::BlankCount(n) => write!(f, "puzzle: expected exactly one blank, found {n}"),
            Self::DuplicateTile(t) => write!(f, "puzzle: tile {t} appears more than once"),
            Self::ShapeMismatch { initial, goal } => write!(
                f,
                "puzzle: initial board is {}x{} but goal board is {}x{}",
                initial.y, initial.x, goal.y, goal.x
            ),
            Self::TileMismatch { missing, extra } => write!(
                f,
                "puzzle: tiles differ from goal (missing {missing:?}, unexpected {extra:?})"
            ),
        }
    }
}

impl std::error::Error for InvalidInput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for InvalidInput {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
