//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Fieldless enum with one variant per digit, so a value outside 1-9 is
/// unrepresentable. An empty cell is expressed as `Option<Digit>` (see
/// [`Cell`](crate::Cell)), never as a sentinel digit.
///
/// # Examples
///
/// ```
/// use gridlace_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// let digit = Digit::new_checked(7);
/// assert_eq!(digit, Some(Digit::D7));
/// assert_eq!(Digit::new_checked(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits from 1 to 9 in ascending order.
    ///
    /// The solver relies on this ordering when enumerating candidates, so the
    /// search visits digits 1 through 9 deterministically.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(3), Digit::D3);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::new_checked(value)
            .unwrap_or_else(|| panic!("digit value must be in 1..=9, got {value}"))
    }

    /// Creates a digit from a value, returning `None` outside the range 1-9.
    #[must_use]
    pub const fn new_checked(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from the character `'1'..='9'`, or `None` otherwise.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='9' => Self::new_checked(ch as u8 - b'0'),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the character `'1'..='9'` for this digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
