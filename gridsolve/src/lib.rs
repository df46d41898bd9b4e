//! Command-line front end for the gridsearch crates.
//!
//! The binary is a thin wrapper: it parses a [`Cli`], installs the logger
//! and hands over to [`run`], which writes everything to the given writer
//! and reports how the search ended as a [`Status`].

pub mod cli;
pub mod error;
pub mod render;

use std::fs;
use std::io::Write;

use gridsearch_core::Point;
use gridsearch_domains::{Board, Maze, fixtures, solve_maze_observed, solve_puzzle_observed};
use gridsearch_engine::{
    Algorithm, NoopObserver, Observer, Outcome, Recorder, SearchLimits, SearchResult, Searcher,
};
use serde::Serialize;

pub use cli::Cli;
use cli::{Command, CompareArgs, MazeArgs, PuzzleArgs, Source};
pub use error::RunError;

/// How a command ended. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Found,
    NotFound,
    Aborted,
}

impl Status {
    /// Process exit code: 0, 1 or 3. Clap exits with 2 on bad arguments.
    pub fn code(self) -> i32 {
        match self {
            Self::Found => 0,
            Self::NotFound => 1,
            Self::Aborted => 3,
        }
    }

    fn of<S>(res: &SearchResult<S>) -> Self {
        match res.outcome {
            Outcome::Found { .. } => Self::Found,
            Outcome::NotFound { .. } => Self::NotFound,
            Outcome::Aborted { .. } => Self::Aborted,
        }
    }
}

#[derive(Serialize)]
struct Report<'a, S> {
    kind: &'static str,
    name: &'a str,
    result: &'a SearchResult<S>,
}

/// Execute the parsed command line, writing the report to `out`.
pub fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> Result<Status, RunError> {
    match &cli.command {
        Command::Maze(args) => run_maze(args, out),
        Command::Puzzle(args) => run_puzzle(args, out),
        Command::Compare(args) => run_compare(args, out),
        Command::Fixtures => {
            list_fixtures(out)?;
            Ok(Status::Found)
        }
    }
}

fn read(path: &std::path::Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<W, T>(out: &mut W, value: &T) -> Result<(), RunError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run_maze<W: Write + ?Sized>(args: &MazeArgs, out: &mut W) -> Result<Status, RunError> {
    let (name, maze, start, goal) = match &args.source {
        Source {
            file: Some(path), ..
        } => {
            let maze = Maze::parse(&read(path)?)?;
            let (Some(start), Some(goal)) = (args.start, args.goal) else {
                return Err(RunError::MissingEndpoints);
            };
            (path.display().to_string(), maze, start, goal)
        }
        Source {
            fixture: Some(name),
            ..
        } => {
            let f = fixtures::maze_named(name)
                .ok_or_else(|| RunError::UnknownFixture(name.clone()))?;
            let start = args.start.unwrap_or(f.start);
            let goal = args.goal.unwrap_or(f.goal);
            (f.name.to_string(), f.maze, start, goal)
        }
        _ => return Err(RunError::NoInput),
    };

    let opts = &args.search;
    let mut rec: Recorder<Point> = Recorder::new();
    let res = solve_maze_observed(&maze, start, goal, opts.algorithm, opts.limits(), &mut rec)?;

    if opts.json {
        write_json(out, &Report {
            kind: "maze",
            name: &name,
            result: &res,
        })?;
        return Ok(Status::of(&res));
    }

    writeln!(out, "maze {name}: {} to {}", render::cell(start), render::cell(goal))?;
    if opts.trace {
        for (i, (p, depth)) in rec.visits().iter().enumerate() {
            writeln!(out, "  #{i:<5} depth {depth:<4} {}", render::cell(*p))?;
        }
    }
    let visited: Vec<Point> = rec.states().copied().collect();
    writeln!(out, "{}", render::maze(&maze, start, goal, &visited, res.path()))?;
    writeln!(out, "{}", render::summary(&res))?;
    if let Some(path) = res.path() {
        let cells: Vec<String> = path.iter().map(|p| render::cell(*p)).collect();
        writeln!(out, "path: {}", cells.join(" "))?;
    }
    Ok(Status::of(&res))
}

fn run_puzzle<W: Write + ?Sized>(args: &PuzzleArgs, out: &mut W) -> Result<Status, RunError> {
    let (name, initial, fixture_goal) = match &args.source {
        Source {
            file: Some(path), ..
        } => (path.display().to_string(), Board::parse(&read(path)?)?, None),
        Source {
            fixture: Some(name),
            ..
        } => {
            let f = fixtures::puzzle_named(name)
                .ok_or_else(|| RunError::UnknownFixture(name.clone()))?;
            (f.name.to_string(), f.initial, Some(f.goal))
        }
        _ => return Err(RunError::NoInput),
    };
    let goal = match (&args.goal_file, fixture_goal) {
        (Some(path), _) => Board::parse(&read(path)?)?,
        (None, Some(goal)) => goal,
        (None, None) => Board::ordered(initial.width(), initial.height()),
    };
    if !initial.parity_matches(&goal) {
        log::warn!(
            "{name}: goal is not reachable (parity differs); the search will exhaust every reachable board"
        );
    }

    let opts = &args.search;
    let mut rec: Recorder<Board> = Recorder::new();
    let mut noop = NoopObserver;
    let observer: &mut dyn Observer<Board> = if opts.trace { &mut rec } else { &mut noop };
    let res = solve_puzzle_observed(&initial, &goal, opts.algorithm, opts.limits(), observer)?;

    if opts.json {
        write_json(out, &Report {
            kind: "puzzle",
            name: &name,
            result: &res,
        })?;
        return Ok(Status::of(&res));
    }

    writeln!(out, "puzzle {name} ({}x{})", initial.width(), initial.height())?;
    for (i, (b, depth)) in rec.visits().iter().enumerate() {
        writeln!(out, "  #{i:<5} depth {depth:<4} {}", render::board_inline(b))?;
    }
    match res.path() {
        Some(path) => write!(out, "{}", render::board_path(path))?,
        None => writeln!(out, "start:\n{initial}\ngoal:\n{goal}")?,
    }
    writeln!(out, "{}", render::summary(&res))?;
    Ok(Status::of(&res))
}

fn compare<P>(problem: &P, limits: &SearchLimits) -> [SearchResult<P::State>; 2]
where
    P: gridsearch_engine::InformedProblem,
{
    [Algorithm::Bfs, Algorithm::AStar]
        .map(|a| Searcher::new(limits.clone()).run(problem, a, &mut NoopObserver))
}

fn run_compare<W: Write + ?Sized>(args: &CompareArgs, out: &mut W) -> Result<Status, RunError> {
    let limits = SearchLimits {
        max_expansions: args.max_expansions,
        ..SearchLimits::default()
    };
    if let Some(f) = fixtures::maze_named(&args.fixture) {
        let results = compare(&f.problem()?, &limits);
        report_comparison("maze", f.name, &results, args.json, out)
    } else if let Some(f) = fixtures::puzzle_named(&args.fixture) {
        let results = compare(&f.problem()?, &limits);
        report_comparison("puzzle", f.name, &results, args.json, out)
    } else {
        Err(RunError::UnknownFixture(args.fixture.clone()))
    }
}

fn report_comparison<S, W>(
    kind: &'static str,
    name: &str,
    results: &[SearchResult<S>],
    json: bool,
    out: &mut W,
) -> Result<Status, RunError>
where
    S: Serialize,
    W: Write + ?Sized,
{
    if json {
        let reports: Vec<Report<'_, S>> = results
            .iter()
            .map(|result| Report { kind, name, result })
            .collect();
        write_json(out, &reports)?;
    } else {
        writeln!(out, "{kind} {name}")?;
        writeln!(out, "{}", render::table_header())?;
        for res in results {
            writeln!(out, "{}", render::table_row(res))?;
        }
    }
    Ok(results.iter().map(Status::of).max().unwrap_or(Status::Found))
}

fn list_fixtures<W: Write + ?Sized>(out: &mut W) -> Result<(), RunError> {
    writeln!(out, "mazes:")?;
    for f in fixtures::mazes() {
        writeln!(
            out,
            "  {:<24} {}x{}  {} to {}",
            f.name,
            f.maze.width(),
            f.maze.height(),
            render::cell(f.start),
            render::cell(f.goal)
        )?;
    }
    writeln!(out, "puzzles:")?;
    for f in fixtures::puzzles() {
        writeln!(
            out,
            "  {:<24} {}x{}  {}",
            f.name,
            f.initial.width(),
            f.initial.height(),
            render::board_inline(&f.initial)
        )?;
    }
    Ok(())
}
