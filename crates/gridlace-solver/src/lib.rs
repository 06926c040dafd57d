//! Backtracking solver for the Gridlace Sudoku crates.
//!
//! The solver consumes a [`Grid`](gridlace_core::Grid) from
//! [`gridlace_core`] and produces either a completed grid or a definitive
//! "no solution" outcome.
//!
//! - [`solver`]: the depth-first search ([`BacktrackSolver`], [`solve`]),
//!   its [`SearchOutcome`] and [`SearchStats`]
//! - [`observer`]: the per-node [`SearchObserver`] hook
//!
//! # Examples
//!
//! ```
//! use gridlace_core::Grid;
//! use gridlace_solver::solve;
//!
//! let grid: Grid = "53..7....\n\
//!                   6..195...\n\
//!                   .98....6.\n\
//!                   8...6...3\n\
//!                   4..8.3..1\n\
//!                   7...2...6\n\
//!                   .6....28.\n\
//!                   ...419..5\n\
//!                   ....8..79"
//!     .parse()?;
//!
//! match solve(&grid) {
//!     Some(solution) => println!("{solution}"),
//!     None => println!("no solution"),
//! }
//! # Ok::<(), gridlace_core::ParseError>(())
//! ```

pub mod observer;
pub mod solver;

// Re-export commonly used types
pub use self::{
    observer::SearchObserver,
    solver::{BacktrackSolver, SearchOutcome, SearchStats, solve},
};
