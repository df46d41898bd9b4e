//! Cross-algorithm properties on the maze and puzzle domains.

use std::collections::HashMap;

use gridsearch_core::{Grid, Point};
use gridsearch_domains::fixtures;
use gridsearch_domains::{
    Board, InvalidInput, Maze, MazeCell, MazeProblem, PuzzleProblem, solve_maze, solve_puzzle,
};
use gridsearch_engine::{
    AbortReason, Algorithm, CancelToken, InformedProblem, Outcome, Recorder, SearchLimits,
    SearchProblem, Searcher, search,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const BOTH: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::AStar];

fn moves<S>(res: &gridsearch_engine::SearchResult<S>) -> Option<usize> {
    res.path().map(|p| p.len())
}

#[test]
fn sample_maze_shortest_route() {
    let f = fixtures::sample_maze();
    let bfs = solve_maze(&f.maze, f.start, f.goal, Algorithm::Bfs, SearchLimits::default()).unwrap();
    let path = bfs.path().unwrap();
    assert_eq!(
        path.states(),
        &[
            Point::at(5, 8),
            Point::at(5, 7),
            Point::at(5, 6),
            Point::at(5, 5),
            Point::at(4, 5)
        ]
    );
    assert_eq!(bfs.visited(), 10);

    let astar =
        solve_maze(&f.maze, f.start, f.goal, Algorithm::AStar, SearchLimits::default()).unwrap();
    assert_eq!(moves(&astar), Some(4));
    assert_eq!(astar.visited(), 6);
}

#[test]
fn heuristic_pays_off_only_where_it_can() {
    let f = fixtures::maze_astar_has_advantage();
    let p = f.problem().unwrap();
    let bfs = search(&p, Algorithm::Bfs);
    let astar = search(&p, Algorithm::AStar);
    assert_eq!(moves(&bfs), Some(8));
    assert_eq!(moves(&astar), Some(8));
    assert_eq!((bfs.visited(), astar.visited()), (27, 9));

    let f = fixtures::maze_astar_no_advantage();
    let p = f.problem().unwrap();
    let bfs = search(&p, Algorithm::Bfs);
    let astar = search(&p, Algorithm::AStar);
    assert_eq!(moves(&bfs), Some(10));
    assert_eq!(moves(&astar), Some(10));
    assert_eq!((bfs.visited(), astar.visited()), (14, 14));
}

#[test]
fn eight_puzzle_instances() {
    // (optimal moves, BFS expanded, A* expanded)
    let expected = [
        (2, 12, 2),
        (0, 0, 0),
        (2, 6, 2),
        (4, 24, 4),
        (8, 282, 12),
        (12, 2152, 36),
    ];
    for (n, &(len, bfs_visited, astar_visited)) in (1..=6).zip(expected.iter()) {
        let f = fixtures::eight_puzzle(n).unwrap();
        let p = f.problem().unwrap();
        let bfs = search(&p, Algorithm::Bfs);
        let astar = search(&p, Algorithm::AStar);
        assert_eq!(moves(&bfs), Some(len), "instance {n}");
        assert_eq!(moves(&astar), Some(len), "instance {n}");
        assert_eq!(bfs.visited(), bfs_visited, "instance {n}");
        assert_eq!(astar.visited(), astar_visited, "instance {n}");
    }
}

#[test]
fn puzzle_path_is_a_chain_of_slides() {
    let f = fixtures::eight_puzzle(6).unwrap();
    let res = solve_puzzle(&f.initial, &f.goal, Algorithm::AStar, SearchLimits::default()).unwrap();
    let path = res.path().unwrap();
    assert_eq!(path.start(), &f.initial);
    assert_eq!(path.goal(), &f.goal);
    for pair in path.states().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!((a.blank() - b.blank()).x.abs() + (a.blank() - b.blank()).y.abs(), 1);
        let differing = a
            .tiles()
            .cells()
            .iter()
            .zip(b.tiles().cells())
            .filter(|(x, y)| x != y)
            .count();
        assert_eq!(differing, 2);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let f = fixtures::eight_puzzle(6).unwrap();
    let p = f.problem().unwrap();
    for algorithm in BOTH {
        let mut first = Recorder::new();
        let mut second = Recorder::new();
        let a = Searcher::default().run(&p, algorithm, &mut first);
        let b = Searcher::default().run(&p, algorithm, &mut second);
        assert_eq!(a, b);
        assert_eq!(first.visits(), second.visits());
    }
}

#[test]
fn trivial_instance_expands_nothing() {
    let goal = fixtures::eight_puzzle_goal();
    for algorithm in BOTH {
        let res = solve_puzzle(&goal, &goal, algorithm, SearchLimits::default()).unwrap();
        assert_eq!(moves(&res), Some(0));
        assert_eq!(res.visited(), 0);
        assert_eq!(res.path().unwrap().states(), &[goal.clone()]);
    }
}

#[test]
fn different_tiles_are_rejected_not_searched() {
    let initial = Board::parse("1 2 3\n4 5 6\n7 9 _").unwrap();
    let err = solve_puzzle(
        &initial,
        &fixtures::eight_puzzle_goal(),
        Algorithm::Bfs,
        SearchLimits::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        InvalidInput::TileMismatch {
            missing: vec![8],
            extra: vec![9]
        }
    );
}

#[test]
fn wrong_parity_exhausts_the_reachable_half() {
    let f = fixtures::two_by_two_unsolvable();
    let p = f.problem().unwrap();
    assert!(!p.is_solvable());
    for algorithm in BOTH {
        let res = search(&p, algorithm);
        assert_eq!(res.outcome, Outcome::NotFound { visited: 12 });
    }
}

fn permutations(items: &[u32]) -> Vec<Vec<u32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn parity_predicts_every_two_by_two_outcome() {
    let goal = Board::ordered(2, 2);
    let mut solvable = 0;
    for perm in permutations(&[0, 1, 2, 3]) {
        let board = Board::from_numbers(&[[perm[0], perm[1]], [perm[2], perm[3]]]).unwrap();
        let res = solve_puzzle(&board, &goal, Algorithm::Bfs, SearchLimits::default()).unwrap();
        assert_eq!(res.is_found(), board.parity_matches(&goal), "{board}");
        if res.is_found() {
            solvable += 1;
        }
    }
    assert_eq!(solvable, 12);
}

#[test]
fn parity_predicts_every_strip_outcome() {
    let goal = Board::ordered(4, 1);
    let mut solvable = 0;
    for perm in permutations(&[0, 1, 2, 3]) {
        let board = Board::from_numbers(&[[perm[0], perm[1], perm[2], perm[3]]]).unwrap();
        let res = solve_puzzle(&board, &goal, Algorithm::Bfs, SearchLimits::default()).unwrap();
        assert_eq!(res.is_found(), board.parity_matches(&goal), "{board}");
        if res.is_found() {
            solvable += 1;
        }
    }
    // Only `1 2 3` in order, with the blank in any of four cells.
    assert_eq!(solvable, 4);

    let stuck = Board::parse("2 3 1 _").unwrap();
    let res = solve_puzzle(&stuck, &goal, Algorithm::Bfs, SearchLimits::default()).unwrap();
    assert_eq!(res.outcome, Outcome::NotFound { visited: 4 });
}

/// BFS distances from `goal` to every board reachable from it.
fn distances_from(goal: &Board) -> HashMap<Board, u32> {
    // Swapping two tiles gives an unreachable target, so the search visits
    // the whole reachable component.
    let mut unreachable = goal.tiles().clone();
    unreachable.swap(Point::new(0, 0), Point::new(1, 0));
    let target = Board::new(unreachable).unwrap();
    let p = PuzzleProblem::new(goal.clone(), target).unwrap();
    let mut rec = Recorder::new();
    let res = Searcher::default().bfs(&p, &mut rec);
    assert!(matches!(res.outcome, Outcome::NotFound { .. }));
    rec.visits().iter().cloned().collect()
}

#[test]
fn manhattan_heuristic_is_admissible_and_consistent() {
    let goal = Board::ordered(3, 2);
    let dist = distances_from(&goal);
    assert_eq!(dist.len(), 360);

    let p = PuzzleProblem::new(goal.clone(), goal.clone()).unwrap();
    let mut buf = Vec::new();
    for (board, &d) in &dist {
        let h = p.estimate(board);
        assert!(h <= d, "h={h} exceeds distance {d} for\n{board}");
        buf.clear();
        p.successors(board, &mut buf);
        for (next, cost) in &buf {
            assert!(h <= cost + p.estimate(next));
        }
    }
}

#[test]
fn astar_matches_bfs_on_scrambles() {
    let mut rng = StdRng::seed_from_u64(2024);
    let goal = Board::ordered(3, 3);
    for _ in 0..20 {
        let steps = rng.random_range(0..30);
        let initial = goal.scrambled(steps, &mut rng);
        let p = PuzzleProblem::new(initial.clone(), goal.clone()).unwrap();
        let bfs = search(&p, Algorithm::Bfs);
        let astar = search(&p, Algorithm::AStar);
        assert!(bfs.is_found(), "scramble must stay solvable:\n{initial}");
        assert_eq!(moves(&bfs), moves(&astar), "\n{initial}");
        assert!(moves(&bfs).is_some_and(|m| m <= steps));
        assert!(astar.visited() <= bfs.visited(), "\n{initial}");
    }
}

fn random_maze(rng: &mut StdRng, width: i32, height: i32) -> Maze {
    let mut grid: Grid<MazeCell> = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if rng.random_range(0..100) < 30 {
                grid.set(Point::new(x, y), MazeCell::Wall);
            }
        }
    }
    Maze::new(grid)
}

/// Shortest distances from `start` by repeated relaxation over every cell.
fn relaxed_distances(maze: &Maze, start: Point) -> HashMap<Point, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    loop {
        let mut changed = false;
        for (p, _) in maze.grid().iter() {
            if !maze.is_open(p) {
                continue;
            }
            let best = maze.neighbors(p).filter_map(|n| dist.get(&n)).min().map(|d| d + 1);
            if let Some(b) = best {
                if dist.get(&p).is_none_or(|&cur| b < cur) {
                    dist.insert(p, b);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

#[test]
fn searches_agree_with_brute_force_on_random_mazes() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut found = 0;
    for _ in 0..60 {
        let maze = random_maze(&mut rng, 7, 6);
        let open: Vec<Point> = maze.grid().iter().map(|(p, _)| p).filter(|p| maze.is_open(*p)).collect();
        if open.len() < 2 {
            continue;
        }
        let start = open[rng.random_range(0..open.len())];
        let goal = open[rng.random_range(0..open.len())];
        let truth = relaxed_distances(&maze, start).get(&goal).copied();
        let problem = MazeProblem::new(&maze, start, goal).unwrap();

        for algorithm in BOTH {
            let res = search(&problem, algorithm);
            assert_eq!(moves(&res), truth, "{algorithm} {start}->{goal}\n{maze}");
            if let Some(path) = res.path() {
                assert_eq!(*path.start(), start);
                assert_eq!(*path.goal(), goal);
                for pair in path.states().windows(2) {
                    assert!(maze.neighbors(pair[0]).any(|n| n == pair[1]));
                }
            }
        }
        if truth.is_some() {
            found += 1;
        }
    }
    assert!(found > 0);
}

#[test]
fn budgets_and_cancellation_abort_cleanly() {
    let f = fixtures::eight_puzzle_hard();
    for algorithm in BOTH {
        let res = solve_puzzle(
            &f.initial,
            &f.goal,
            algorithm,
            SearchLimits::default().with_max_expansions(1000),
        )
        .unwrap();
        assert_eq!(
            res.outcome,
            Outcome::Aborted {
                visited: 1000,
                reason: AbortReason::ExpansionBudget
            }
        );

        let token = CancelToken::new();
        token.cancel();
        let res = solve_puzzle(
            &f.initial,
            &f.goal,
            algorithm,
            SearchLimits::default().with_cancel(token),
        )
        .unwrap();
        assert_eq!(
            res.outcome,
            Outcome::Aborted {
                visited: 0,
                reason: AbortReason::Cancelled
            }
        );
    }
}

#[test]
fn hard_instance_under_astar() {
    let f = fixtures::eight_puzzle_hard();
    let res = search(&f.problem().unwrap(), Algorithm::AStar);
    assert_eq!(moves(&res), Some(26));
    assert_eq!(res.visited(), 3582);
}

#[test]
#[ignore = "expands over 160,000 boards"]
fn hard_instance_under_bfs() {
    let f = fixtures::eight_puzzle_hard();
    let res = search(&f.problem().unwrap(), Algorithm::Bfs);
    assert_eq!(moves(&res), Some(26));
    assert_eq!(res.visited(), 163_641);
}

#[cfg(feature = "serde")]
#[test]
fn results_serialize() {
    let f = fixtures::eight_puzzle(1).unwrap();
    let res = search(&f.problem().unwrap(), Algorithm::AStar);
    let json = serde_json::to_string(&res).unwrap();
    let back: gridsearch_engine::SearchResult<Board> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, res);
}
