//! Plain-text rendering of problems and results.

use gridsearch_core::Point;
use gridsearch_domains::{Board, Maze};
use gridsearch_engine::{Outcome, Path, SearchResult};

/// `(row, col)`, the notation used on the command line.
pub fn cell(p: Point) -> String {
    format!("({}, {})", p.row(), p.col())
}

/// A board on one line, rows separated by `/`.
pub fn board_inline(b: &Board) -> String {
    b.tiles()
        .rows()
        .map(|row| row.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// The maze with visited cells shown as `o`, the path as `*`, and the
/// endpoints as `S` and `G`.
pub fn maze(
    maze: &Maze,
    start: Point,
    goal: Point,
    visited: &[Point],
    path: Option<&Path<Point>>,
) -> String {
    let mut chars = maze.annotate(visited).grid().map(|_, c| c.to_char());
    for p in path.into_iter().flat_map(Path::iter) {
        chars.set(*p, '*');
    }
    chars.set(start, 'S');
    chars.set(goal, 'G');
    chars
        .rows()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every board along the path, numbered by move.
pub fn board_path(path: &Path<Board>) -> String {
    let mut out = String::new();
    for (i, b) in path.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if i == 0 {
            out.push_str("start:\n");
        } else {
            out.push_str(&format!("move {i}:\n"));
        }
        out.push_str(&b.to_string());
        out.push('\n');
    }
    out
}

/// One-line description of an outcome.
pub fn summary<S>(res: &SearchResult<S>) -> String {
    match &res.outcome {
        Outcome::Found { path, visited } => format!(
            "{}: found a path of {} moves, {visited} states expanded",
            res.algorithm,
            path.len()
        ),
        Outcome::NotFound { visited } => format!(
            "{}: no path exists, {visited} states expanded",
            res.algorithm
        ),
        Outcome::Aborted { visited, reason } => format!(
            "{}: stopped ({reason}) after {visited} states expanded",
            res.algorithm
        ),
    }
}

/// Comparison table header, aligned with [`table_row`].
pub fn table_header() -> String {
    format!(
        "{:<10} {:<10} {:>6} {:>9} {:>10} {:>6} {:>9}",
        "algorithm", "outcome", "moves", "expanded", "generated", "stale", "frontier"
    )
}

pub fn table_row<S>(res: &SearchResult<S>) -> String {
    let outcome = match res.outcome {
        Outcome::Found { .. } => "found",
        Outcome::NotFound { .. } => "no path",
        Outcome::Aborted { .. } => "aborted",
    };
    let moves = res
        .path()
        .map_or_else(|| "-".to_string(), |p| p.len().to_string());
    format!(
        "{:<10} {:<10} {:>6} {:>9} {:>10} {:>6} {:>9}",
        res.algorithm.to_string(),
        outcome,
        moves,
        res.stats.expanded,
        res.stats.generated,
        res.stats.stale,
        res.stats.max_frontier
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_engine::{Algorithm, SearchStats};

    #[test]
    fn maze_overlay() {
        let m = Maze::parse("....\n.##.\n....").unwrap();
        let path = Path::new(vec![
            Point::at(0, 0),
            Point::at(0, 1),
            Point::at(0, 2),
            Point::at(0, 3),
        ]);
        let text = maze(
            &m,
            Point::at(0, 0),
            Point::at(0, 3),
            &[Point::at(1, 0), Point::at(0, 1)],
            Some(&path),
        );
        assert_eq!(text, "S**G\no##.\n....");
    }

    #[test]
    fn boards_inline_and_numbered() {
        let b = Board::parse("1 2\n3 _").unwrap();
        assert_eq!(board_inline(&b), "1 2 / 3 _");
        let text = board_path(&Path::new(vec![b.clone()]));
        assert_eq!(text, "start:\n1 2\n3 _\n");
    }

    #[test]
    fn summaries() {
        let res: SearchResult<Point> = SearchResult {
            algorithm: Algorithm::Bfs,
            outcome: Outcome::NotFound { visited: 12 },
            stats: SearchStats::default(),
        };
        assert_eq!(summary(&res), "bfs: no path exists, 12 states expanded");
        assert!(table_row(&res).starts_with("bfs        no path"));
        assert_eq!(table_header().len(), table_row(&res).len());
    }
}
