use std::collections::{HashMap, HashSet, VecDeque};

use crate::observer::{Observer, Visit};
use crate::path::Path;
use crate::result::{SearchResult, SearchStats};
use crate::searcher::{Algorithm, Searcher};
use crate::traits::SearchProblem;

impl Searcher {
    /// Breadth-first search from `problem.initial()`.
    ///
    /// Move costs are ignored: every move counts as one step, so the first
    /// path found is shortest in moves. A neighbor is queued only the first
    /// time it is discovered (it gets a parent-map entry at that moment);
    /// dequeued states that were already expanded are skipped as well.
    pub fn bfs<P, O>(&self, problem: &P, observer: &mut O) -> SearchResult<P::State>
    where
        P: SearchProblem + ?Sized,
        O: Observer<P::State> + ?Sized,
    {
        let start = problem.initial();
        let mut stats = SearchStats::default();

        let mut queue: VecDeque<(P::State, u32)> = VecDeque::new();
        // Every discovered state, mapped to its predecessor (`None` = root).
        let mut parents: HashMap<P::State, Option<P::State>> = HashMap::new();
        let mut visited: HashSet<P::State> = HashSet::new();

        parents.insert(start.clone(), None);
        queue.push_back((start, 0));
        stats.max_frontier = 1;

        let mut nbuf = Vec::with_capacity(4);
        let mut index = 0;

        while let Some((current, depth)) = queue.pop_front() {
            if visited.contains(&current) {
                stats.stale += 1;
                continue;
            }

            observer.on_visit(Visit {
                index,
                state: &current,
                depth,
            });
            log::trace!("bfs: visit #{index} at depth {depth}");
            index += 1;

            if problem.is_goal(&current) {
                let path = Path::from_parent_map(&parents, current);
                return Self::found(Algorithm::Bfs, path, stats, observer);
            }

            if let Some(reason) = self.check(stats.expanded, queue.len()) {
                return Self::aborted(Algorithm::Bfs, reason, stats);
            }

            nbuf.clear();
            problem.successors(&current, &mut nbuf);
            stats.generated += nbuf.len();

            for (next, _) in nbuf.drain(..) {
                // Visited states are always in `parents` too.
                if parents.contains_key(&next) {
                    continue;
                }
                parents.insert(next.clone(), Some(current.clone()));
                queue.push_back((next, depth + 1));
            }
            stats.max_frontier = stats.max_frontier.max(queue.len());

            visited.insert(current);
            stats.expanded = visited.len();
        }

        Self::not_found(Algorithm::Bfs, stats)
    }
}
