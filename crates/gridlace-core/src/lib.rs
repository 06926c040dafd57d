//! Core data structures for the Gridlace Sudoku solver.
//!
//! This crate provides the grid model and the rule checks that the solver
//! crate builds on:
//!
//! - [`digit`]: type-safe digits 1-9 ([`Digit`])
//! - [`digit_set`]: 9-bit digit sets ([`DigitSet`])
//! - [`position`]: board coordinates ([`Position`])
//! - [`house`]: the 27 constraint groups ([`House`])
//! - [`grid`]: the 81-cell grid value with its plain-text format ([`Grid`])
//! - [`rules`]: validity and completeness checks
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Digit, Grid, Position};
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
//! assert!(grid.is_consistent());
//! assert!(!grid.is_solved());
//!
//! let placed = grid.with(Position::new(2, 0), Digit::D4);
//! assert!(placed.is_consistent());
//! # Ok::<(), gridlace_core::ParseError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod rules;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Cell, Grid, ParseError},
    house::House,
    position::Position,
    rules::house_is_valid,
};
