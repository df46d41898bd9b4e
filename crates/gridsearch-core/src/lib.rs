//! **gridsearch-core**: geometry and grid storage for the gridsearch crates.
//!
//! Both search domains (mazes and sliding-tile boards) are rectangles of
//! cells addressed by a [`Point`]; this crate provides that common ground.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridError};
