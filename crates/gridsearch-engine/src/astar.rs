use std::collections::HashSet;

use crate::node::NodeArena;
use crate::observer::{Observer, Visit};
use crate::path::Path;
use crate::queue::OpenQueue;
use crate::result::{SearchResult, SearchStats};
use crate::searcher::{Algorithm, Searcher};
use crate::traits::InformedProblem;

impl Searcher {
    /// A* search from `problem.initial()`.
    ///
    /// The open queue pops the lowest `f = g + h`, ties going to the node
    /// generated first. Entries are never updated in place: a state reached
    /// again is pushed as a new node, and whichever copy pops after the
    /// state was closed is dropped as stale. With an admissible heuristic the
    /// returned path is optimal.
    pub fn astar<P, O>(&self, problem: &P, observer: &mut O) -> SearchResult<P::State>
    where
        P: InformedProblem + ?Sized,
        O: Observer<P::State> + ?Sized,
    {
        let start = problem.initial();
        let mut stats = SearchStats::default();

        let mut arena: NodeArena<P::State> = NodeArena::new();
        let mut open = OpenQueue::new();
        let mut closed: HashSet<P::State> = HashSet::new();

        let h0 = problem.estimate(&start);
        let root = arena.push(start, None, 0, h0);
        open.push(root, arena.get(root).f());
        stats.max_frontier = 1;

        let mut nbuf = Vec::with_capacity(4);
        let mut index = 0;

        while let Some((ci, f)) = open.pop() {
            let node = arena.get(ci);
            debug_assert_eq!(f, node.f());

            // Skip stale entries.
            if closed.contains(&node.state) {
                stats.stale += 1;
                continue;
            }

            let g = node.g;
            observer.on_visit(Visit {
                index,
                state: &node.state,
                depth: g,
            });
            log::trace!("astar: visit #{index} g={g} f={f}");
            index += 1;

            if problem.is_goal(&node.state) {
                let path = Path::from_arena(&arena, ci);
                return Self::found(Algorithm::AStar, path, stats, observer);
            }

            if let Some(reason) = self.check(stats.expanded, open.len()) {
                log::debug!("astar: stopped at f={f}, next open f={:?}", open.peek_f());
                return Self::aborted(Algorithm::AStar, reason, stats);
            }

            let current = node.state.clone();
            nbuf.clear();
            problem.successors(&current, &mut nbuf);
            stats.generated += nbuf.len();
            closed.insert(current);
            stats.expanded = closed.len();

            for (next, cost) in nbuf.drain(..) {
                // Would be dropped as stale on pop anyway.
                if closed.contains(&next) {
                    continue;
                }
                let ng = g + cost;
                let nh = problem.estimate(&next);
                let ni = arena.push(next, Some(ci), ng, nh);
                open.push(ni, arena.get(ni).f());
            }
            stats.max_frontier = stats.max_frontier.max(open.len());
        }

        Self::not_found(Algorithm::AStar, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{AbortReason, SearchLimits};
    use crate::observer::{NoopObserver, Recorder};
    use crate::result::Outcome;
    use crate::toy::{OpenGrid, Ring};
    use gridsearch_core::Point;

    const ROOM: &str = "\
.......
.#####.
.#...#.
.#.#.#.
...#...";

    #[test]
    fn start_is_goal() {
        let g = OpenGrid::parse("..", Point::new(0, 0), Point::new(0, 0));
        let res = Searcher::default().astar(&g, &mut NoopObserver);
        assert_eq!(res.path().map(Path::len), Some(0));
        assert_eq!(res.visited(), 0);
    }

    #[test]
    fn matches_bfs_length() {
        let g = OpenGrid::parse(ROOM, Point::new(0, 4), Point::new(4, 3));
        let bfs = Searcher::default().bfs(&g, &mut NoopObserver);
        let astar = Searcher::default().astar(&g, &mut NoopObserver);
        assert_eq!(bfs.path().unwrap().len(), astar.path().unwrap().len());
        assert!(astar.visited() <= bfs.visited());
    }

    #[test]
    fn straight_corridor_expands_only_the_path() {
        let g = OpenGrid::parse(
            "\
.......
.......
.......",
            Point::new(0, 1),
            Point::new(6, 1),
        );
        let res = Searcher::default().astar(&g, &mut NoopObserver);
        assert_eq!(res.path().unwrap().len(), 6);
        assert_eq!(res.visited(), 6);
        assert_eq!(res.stats.stale, 0);
    }

    #[test]
    fn path_links_are_adjacent() {
        let g = OpenGrid::parse(ROOM, Point::new(0, 4), Point::new(4, 3));
        let res = Searcher::default().astar(&g, &mut NoopObserver);
        let states = res.path().unwrap().states();
        for w in states.windows(2) {
            assert_eq!((w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs(), 1);
        }
    }

    #[test]
    fn no_state_expanded_twice() {
        let g = OpenGrid::parse(ROOM, Point::new(0, 0), Point::new(4, 3));
        let mut rec = Recorder::new();
        let res = Searcher::default().astar(&g, &mut rec);
        let unique: HashSet<Point> = rec.states().copied().collect();
        assert_eq!(unique.len(), rec.len());
        // Every reported visit but the goal was expanded.
        assert_eq!(res.visited(), rec.len() - 1);
    }

    #[test]
    fn expansion_order_never_lowers_f() {
        let grid = OpenGrid::parse(ROOM, Point::new(0, 0), Point::new(4, 3));
        let mut rec = Recorder::new();
        let res = Searcher::default().astar(&grid, &mut rec);
        assert!(res.is_found());
        let fs: Vec<u32> = rec
            .visits()
            .iter()
            .map(|(p, depth)| depth + grid.estimate(p))
            .collect();
        assert!(fs.windows(2).all(|w| w[0] <= w[1]), "{fs:?}");
        assert_eq!(fs.last(), Some(&(res.path().unwrap().len() as u32)));
    }

    #[test]
    fn exhausts_with_closed_set_size() {
        let ring = Ring::new(9, 42);
        let res = Searcher::default().astar(&ring, &mut NoopObserver);
        assert_eq!(res.outcome, Outcome::NotFound { visited: 9 });
    }

    #[test]
    fn frontier_budget_aborts() {
        let g = OpenGrid::parse(ROOM, Point::new(0, 0), Point::new(4, 3));
        let s = Searcher::new(SearchLimits::unlimited().with_max_frontier(0));
        let res = s.astar(&g, &mut NoopObserver);
        assert!(matches!(
            res.outcome,
            Outcome::Aborted {
                reason: AbortReason::FrontierBudget,
                ..
            }
        ));
    }

    #[test]
    fn run_dispatches() {
        let g = OpenGrid::parse(ROOM, Point::new(0, 4), Point::new(6, 4));
        let s = Searcher::default();
        assert_eq!(
            s.run(&g, Algorithm::AStar, &mut NoopObserver),
            s.astar(&g, &mut NoopObserver)
        );
        assert_eq!(
            s.run(&g, Algorithm::Bfs, &mut NoopObserver).algorithm,
            Algorithm::Bfs
        );
    }
}
