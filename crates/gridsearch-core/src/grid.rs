//! An owned, rectangular grid of cells.
//!
//! [`Grid`] stores its cells row-major in a single `Vec`. Cloning a grid
//! deep-copies its cells, so a grid can serve directly as (part of) a search
//! state: two grids are equal and hash equally exactly when their
//! dimensions and contents match.

use std::fmt;

use crate::geom::{Point, Range};

/// A 2D grid of `C` values, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<C> {
    cells: Vec<C>,
    width: i32,
    height: i32,
}

impl<C: Clone + Default> Grid<C> {
    /// Create a new grid filled with `C::default()`.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![C::default(); (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }
}

impl<C> Grid<C> {
    /// Build a grid from a list of rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Returns the bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Point of a flat index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&C> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Set the cell at a point. Returns `false` (and does nothing) if out of
    /// bounds.
    pub fn set(&mut self, p: Point, cell: C) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Swap the cells at two points. Returns `false` if either is out of
    /// bounds.
    pub fn swap(&mut self, a: Point, b: Point) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// First point (row-major) whose cell satisfies `f`.
    pub fn position(&self, mut f: impl FnMut(&C) -> bool) -> Option<Point> {
        self.cells.iter().position(|c| f(c)).map(|i| self.point(i))
    }

    /// Build a grid of the same shape by transforming every cell.
    pub fn map<D>(&self, mut f: impl FnMut(Point, &C) -> D) -> Grid<D> {
        Grid {
            cells: self.iter().map(|(p, c)| f(p, c)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over `(Point, &C)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &C)> {
        self.bounds().iter().zip(self.cells.iter())
    }
}

impl<C: PartialEq> Grid<C> {
    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: &C) -> usize {
        self.cells.iter().filter(|c| *c == cell).count()
    }
}

/// Errors that can occur when building a grid from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
