use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign, Sub},
};

use itertools::Itertools;

/// Set of the values 1..=9 still possible for a cell.
///
/// Bit `d - 1` stands for value `d`.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Candidates(u16);

impl Candidates {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(0x1ff);

    /// Set holding only `value`.
    ///
    /// Panics if `value` is not in 1..=9.
    pub fn single(value: u8) -> Self {
        Self(Self::bit(value))
    }

    fn bit(value: u8) -> u16 {
        assert!((1..=9).contains(&value), "Invalid candidate: {value}");
        1 << (value - 1)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_single(self) -> bool {
        self.0.count_ones() == 1
    }

    /// The only remaining candidate, if there is exactly one.
    pub fn single_value(self) -> Option<u8> {
        if self.is_single() {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    pub fn contains(self, value: u8) -> bool {
        self.0 & Self::bit(value) != 0
    }

    /// Clears `value`, returning whether it was present.
    pub fn remove(&mut self, value: u8) -> bool {
        let present = self.contains(value);
        self.0 &= !Self::bit(value);
        present
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.difference(other).is_empty()
    }

    /// Remaining candidates in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&value| self.contains(value))
    }
}

impl BitOr for Candidates {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Candidates {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Candidates {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Sub for Candidates {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl FromIterator<u8> for Candidates {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, value| set | Self::single(value))
    }
}

impl fmt::Debug for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(","))
    }
}
