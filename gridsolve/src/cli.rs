//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gridsearch_core::Point;
use gridsearch_engine::{Algorithm, SearchLimits};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve mazes and sliding-tile puzzles with BFS or A*", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG also works.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a route through a maze
    Maze(MazeArgs),
    /// Solve a sliding-tile puzzle
    Puzzle(PuzzleArgs),
    /// Run BFS and A* on a named fixture and compare their effort
    Compare(CompareArgs),
    /// List the built-in fixtures
    Fixtures,
}

/// Where the problem comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Read the layout from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Use a built-in fixture (see `gridsolve fixtures`)
    #[arg(long)]
    pub fixture: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchOpts {
    /// bfs or astar
    #[arg(short, long, default_value = "astar")]
    pub algorithm: Algorithm,

    /// Stop after expanding this many states
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Stop once more than this many states are queued
    #[arg(long)]
    pub max_frontier: Option<usize>,

    /// Print every visited state in visit order
    #[arg(long)]
    pub trace: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchOpts {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
            max_frontier: self.max_frontier,
            cancel: None,
        }
    }
}

#[derive(Args, Debug)]
pub struct MazeArgs {
    #[command(flatten)]
    pub source: Source,

    /// Start cell as ROW,COL (required with --file)
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Point>,

    /// Goal cell as ROW,COL (required with --file)
    #[arg(long, value_parser = parse_cell)]
    pub goal: Option<Point>,

    #[command(flatten)]
    pub search: SearchOpts,
}

#[derive(Args, Debug)]
pub struct PuzzleArgs {
    #[command(flatten)]
    pub source: Source,

    /// Goal board file; defaults to the ordered board of the same size
    #[arg(long)]
    pub goal_file: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchOpts,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Fixture name
    pub fixture: String,

    /// Stop each run after expanding this many states
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse `ROW,COL`.
pub fn parse_cell(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row: i32 = row.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col: i32 = col.trim().parse().map_err(|e| format!("column: {e}"))?;
    Ok(Point::at(row, col))
}
