//! A set of digits 1-9 backed by a 9-bit mask.

use std::{fmt, iter::FusedIterator, ops::BitOr};

use crate::Digit;

/// A set of [`Digit`]s represented as a bitset.
///
/// Bits 0-8 of a `u16` represent digits 1-9 respectively. The validator uses
/// this to detect duplicated digits within a house, and candidate computation
/// uses it to collect the digits already present in the houses through a cell.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// assert!(set.insert(Digit::D5));
/// assert!(!set.insert(Digit::D5)); // already present
/// assert!(set.contains(Digit::D5));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(0b1_1111_1111);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to the set. Returns `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.0 |= Self::bit(digit);
        inserted
    }

    /// Removes `digit` from the set. Returns `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.0 &= !Self::bit(digit);
        removed
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self)
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(DigitSet);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0.is_empty() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.0.trailing_zeros() as u8 + 1);
        self.0.remove(digit);
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digit::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());
        assert!(set.insert(D1));
        assert!(set.insert(D9));
        assert!(!set.insert(D1));
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = DigitSet::from_iter([D2, D4]);
        assert!(set.remove(D2));
        assert!(!set.remove(D2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_full_contains_every_digit() {
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_order_is_ascending() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_difference() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);
        assert_eq!(a.difference(b), DigitSet::from_iter([D1]));
        assert_eq!(DigitSet::FULL.difference(DigitSet::FULL), DigitSet::EMPTY);
    }

    #[test]
    fn test_union() {
        let a = DigitSet::from_iter([D1, D2]);
        let b = DigitSet::from_iter([D2, D3]);
        assert_eq!(a | b, DigitSet::from_iter([D1, D2, D3]));
    }
}
