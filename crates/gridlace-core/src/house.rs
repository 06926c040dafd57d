//! Constraint groups: rows, columns, and 3×3 boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Every cell belongs to exactly three houses, and a grid obeys the rules
/// when no house contains a digit twice. The 27 houses are enumerated in
/// [`House::ALL`] in a fixed order (rows, then columns, then boxes), which
/// tests rely on for reproducible group extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            boxes[index as usize] = Self::Box { index };
            index += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// Rows run left to right, columns top to bottom, and boxes row-major
    /// within the block.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_at(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the three houses containing `pos`: its row, column, and box.
    #[must_use]
    pub const fn houses_of(pos: Position) -> [Self; 3] {
        [
            House::Row { y: pos.y() },
            House::Column { x: pos.x() },
            House::Box {
                index: pos.box_index(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_is_rows_columns_boxes() {
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[8], House::Row { y: 8 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[17], House::Column { x: 8 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_each_position_in_exactly_three_houses() {
        for pos in Position::all() {
            let containing = House::ALL
                .iter()
                .filter(|house| (0..9).any(|i| house.position_at(i) == pos))
                .count();
            assert_eq!(containing, 3, "{pos} should be in 3 houses");
        }
    }

    #[test]
    fn test_houses_of_contain_position() {
        for pos in Position::all() {
            for house in House::houses_of(pos) {
                assert!(
                    (0..9).any(|i| house.position_at(i) == pos),
                    "{house:?} should contain {pos}"
                );
            }
        }
    }

    #[test]
    fn test_box_positions_cover_block() {
        // box 4 covers rows 3-5, columns 3-5
        let positions: Vec<_> = (0..9)
            .map(|i| House::Box { index: 4 }.position_at(i))
            .collect();
        for pos in &positions {
            assert!((3..6).contains(&pos.x()) && (3..6).contains(&pos.y()));
        }
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[8], Position::new(5, 5));
    }
}
