//! The 81-cell grid and its plain-text format.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Digit, House, Position};

/// A single cell: empty or holding a digit 1-9.
pub type Cell = Option<Digit>;

/// A 9×9 Sudoku grid of 81 [`Cell`]s in row-major order.
///
/// `Grid` is a plain value: transformations like [`with`](Self::with) return
/// a new grid instead of mutating in place, so every branch of a backtracking
/// search owns an independent grid and no state is shared between branches.
///
/// # Text format
///
/// A grid parses from and renders to 9 lines of 9 characters. Digits stand
/// for themselves; `.` marks an empty cell (` ` and `_` are also accepted on
/// input). Rendering always uses `.`, so rendering and re-parsing a grid
/// gives the grid back.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, Grid, Position};
///
/// let grid: Grid = "53..7....\n\
///                   6..195...\n\
///                   .98....6.\n\
///                   8...6...3\n\
///                   4..8.3..1\n\
///                   7...2...6\n\
///                   .6....28.\n\
///                   ...419..5\n\
///                   ....8..79"
///     .parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Grid {
    /// The grid with all 81 cells empty.
    pub const EMPTY: Self = Self {
        cells: [None; 81],
    };

    /// Creates a grid from 81 cells in row-major order.
    #[must_use]
    pub const fn from_cells(cells: [Cell; 81]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns a new grid with `digit` placed at `pos`.
    ///
    /// The receiver is left untouched; the solver calls this once per
    /// candidate to derive an independent branch grid.
    #[must_use]
    pub const fn with(&self, pos: Position, digit: Digit) -> Self {
        let mut cells = self.cells;
        cells[pos.index()] = Some(digit);
        Self { cells }
    }

    /// Returns the position of the first empty cell in row-major order, or
    /// `None` if the grid is fully filled.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the 9 cells of `house`, in the house's own order.
    #[must_use]
    pub fn house(&self, house: House) -> [Cell; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.get(house.position_at(i))
        })
    }

    /// Returns the 9 rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> [[Cell; 9]; 9] {
        House::ROWS.map(|house| self.house(house))
    }

    /// Returns the 9 columns, left to right.
    #[must_use]
    pub fn columns(&self) -> [[Cell; 9]; 9] {
        House::COLUMNS.map(|house| self.house(house))
    }

    /// Returns the 9 boxes, left to right, top to bottom.
    #[must_use]
    pub fn boxes(&self) -> [[Cell; 9]; 9] {
        House::BOXES.map(|house| self.house(house))
    }
}

/// Error parsing a grid from text.
///
/// Rows and columns in messages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input does not have exactly 9 rows.
    #[display("expected 9 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not have exactly 9 characters.
    #[display("row {row} has {found} characters, expected 9")]
    WrongRowLength {
        /// 1-based row number.
        row: usize,
        /// Number of characters found.
        found: usize,
    },
    /// A character is neither a digit 1-9 nor an empty-cell marker.
    #[display("invalid character {ch:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// 1-based row number.
        row: usize,
        /// 1-based column number.
        column: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut rows = 0;
        for (y, line) in s.lines().enumerate() {
            if y >= 9 {
                return Err(ParseError::WrongRowCount {
                    found: s.lines().count(),
                });
            }
            let found = line.chars().count();
            if found != 9 {
                return Err(ParseError::WrongRowLength { row: y + 1, found });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' | '_' => None,
                    _ => Some(Digit::from_char(ch).ok_or(ParseError::InvalidCharacter {
                        row: y + 1,
                        column: x + 1,
                        ch,
                    })?),
                };
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(x as u8, y as u8);
                cells[pos.index()] = cell;
            }
            rows += 1;
        }
        if rows != 9 {
            return Err(ParseError::WrongRowCount { found: rows });
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..9 {
                match self.get(Position::new(x, y)) {
                    Some(digit) => f.write_char(digit.as_char())?,
                    None => f.write_char('.')?,
                }
            }
        }
        Ok(())
    }
}
