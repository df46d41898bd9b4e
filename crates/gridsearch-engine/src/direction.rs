use gridsearch_core::Point;

/// One of the four axis-aligned moves on a grid.
///
/// [`Direction::ALL`] fixes the expansion order used by every successor
/// generator: left, up, right, down. The order decides which of several
/// equally short paths a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit offset of this direction (Y grows down).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
        }
    }

    /// The point one step from `p` in this direction.
    #[inline]
    pub fn step(self, p: Point) -> Point {
        p + self.delta()
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

/// Cardinal neighbors of `p` in [`Direction::ALL`] order, keeping only those
/// for which `keep` returns `true`.
pub fn cardinal(p: Point, mut keep: impl FnMut(Point) -> bool) -> impl Iterator<Item = Point> {
    Direction::ALL
        .into_iter()
        .map(move |d| d.step(p))
        .filter(move |n| keep(*n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_left_up_right_down() {
        let p = Point::new(5, 5);
        let got: Vec<Point> = cardinal(p, |_| true).collect();
        assert_eq!(
            got,
            vec![
                Point::new(4, 5),
                Point::new(5, 4),
                Point::new(6, 5),
                Point::new(5, 6),
            ]
        );
    }

    #[test]
    fn cardinal_filters() {
        let got: Vec<Point> = cardinal(Point::ZERO, |n| n.x >= 0 && n.y >= 0).collect();
        assert_eq!(got, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn reverse_undoes_step() {
        for d in Direction::ALL {
            let p = Point::new(3, 3);
            assert_eq!(d.reverse().step(d.step(p)), p);
        }
    }
}
