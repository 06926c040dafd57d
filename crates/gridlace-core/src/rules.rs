//! Validity and completeness checks for grids.
//!
//! A grid obeys the Sudoku rules when none of its 27 houses contains a digit
//! twice ([`Grid::is_consistent`]); it is solved when every house contains
//! each digit exactly once ([`Grid::is_solved`]). Both checks are pure
//! functions of the grid value.

use crate::{Cell, DigitSet, Grid, House, Position};

/// Returns `true` if no digit appears more than once among the non-empty
/// cells of `cells`.
///
/// Empty cells do not count towards uniqueness: an all-empty group is valid,
/// and so is a group with several empties.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, house_is_valid};
///
/// let empty = [None; 9];
/// assert!(house_is_valid(&empty));
///
/// let mut dup = [None; 9];
/// dup[0] = Some(Digit::D5);
/// dup[3] = Some(Digit::D5);
/// assert!(!house_is_valid(&dup));
/// ```
#[must_use]
pub fn house_is_valid(cells: &[Cell; 9]) -> bool {
    let mut seen = DigitSet::new();
    cells
        .iter()
        .flatten()
        .all(|&digit| seen.insert(digit))
}

impl Grid {
    /// Returns `true` if every house obeys the rules.
    ///
    /// This is a consistency check, not a completeness check: a partially
    /// filled grid with no duplicated digit in any row, column, or box is
    /// consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.iter().all(|&house| house_is_valid(&self.house(house)))
    }

    /// Returns `true` if every house contains each digit 1-9 exactly once.
    ///
    /// Equivalent to: the grid has no empty cell and is consistent.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        House::ALL.iter().all(|&house| {
            let mut seen = DigitSet::new();
            for cell in self.house(house) {
                let Some(digit) = cell else {
                    return false;
                };
                if !seen.insert(digit) {
                    return false;
                }
            }
            seen == DigitSet::FULL
        })
    }

    /// Returns the digits that can be placed at `pos` without breaking any of
    /// the three houses through it.
    ///
    /// On a consistent grid this agrees with placing each digit and
    /// re-checking the whole grid: houses not containing `pos` cannot change,
    /// so only the row, column, and box of `pos` need consulting. Only
    /// meaningful for empty cells; for a filled cell the result excludes the
    /// cell's own digit.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut used = DigitSet::new();
        for house in House::houses_of(pos) {
            for digit in self.house(house).into_iter().flatten() {
                used.insert(digit);
            }
        }
        DigitSet::FULL.difference(used)
    }
}
