//! Command-line interface for the Gridlace Sudoku solver.
//!
//! Reads a puzzle (9 lines of 9 characters, digits for givens and `.`, `_`,
//! or space for blanks) from a file or standard input, solves it, and prints
//! the completed grid.
//!
//! # Usage
//!
//! ```sh
//! gridlace puzzle.txt
//! cat puzzle.txt | gridlace
//! ```
//!
//! Print every grid the search visits, one per node:
//!
//! ```sh
//! gridlace --trace puzzle.txt
//! ```
//!
//! Give up after a time budget (reported as a timeout, not as "no
//! solution"):
//!
//! ```sh
//! gridlace --timeout 5 puzzle.txt
//! ```

use std::{
    fs, io,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

use clap::Parser;
use gridlace_core::Grid;
use gridlace_solver::{BacktrackSolver, SearchOutcome};

const EXIT_NO_SOLUTION: i32 = 1;
const EXIT_BAD_INPUT: i32 = 2;
const EXIT_TIMEOUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve. Reads standard input when omitted or `-`.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Print every grid the search visits.
    #[arg(long)]
    trace: bool,

    /// Give up after this many seconds.
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<f64>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let input = match read_input(args.puzzle.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("failed to read puzzle: {err}");
            process::exit(EXIT_BAD_INPUT);
        }
    };

    let grid: Grid = match input.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(EXIT_BAD_INPUT);
        }
    };

    let mut solver = BacktrackSolver::new();
    if let Some(seconds) = args.timeout {
        let Ok(budget) = Duration::try_from_secs_f64(seconds) else {
            eprintln!("invalid timeout: {seconds}");
            process::exit(EXIT_BAD_INPUT);
        };
        solver = solver.with_deadline(Instant::now() + budget);
    }

    let started = Instant::now();
    let (outcome, stats) = if args.trace {
        solver.solve_with_stats(&grid, &mut |visited: &Grid| println!("{visited}\n"))
    } else {
        solver.solve_with_stats(&grid, &mut |_: &Grid| {})
    };

    log::info!(
        "visited {} nodes, tried {} placements, backtracked {} times in {:?}",
        stats.nodes_visited(),
        stats.placements_tried(),
        stats.backtrack_count(),
        started.elapsed()
    );

    match outcome {
        SearchOutcome::Solved(solution) => println!("{solution}"),
        SearchOutcome::Exhausted => {
            eprintln!("no solution");
            process::exit(EXIT_NO_SOLUTION);
        }
        SearchOutcome::DeadlineExceeded => {
            eprintln!("timed out before finding a solution");
            process::exit(EXIT_TIMEOUT);
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => io::read_to_string(io::stdin()),
    }
}
