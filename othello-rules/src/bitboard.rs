//! A compact set of board locations.
//!
//! Bit `i` of a [`Bitboard`] stands for the row-major flat index `i`, so the
//! least significant bit is the upper-left corner (A1) and the most significant
//! bit is the lower-right corner (H8).

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for cheap set operations, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No locations set.
    pub const EMPTY: Self = Self(0);

    /// A bitboard with only the flat index `index` set.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SPACES);
        Self(1 << index)
    }

    /// Whether the flat index `index` is set.
    #[inline]
    pub fn contains_index(self, index: usize) -> bool {
        !(self & Self::from_index(index)).is_empty()
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The smallest set flat index, which is the first location in row-major order.
    #[inline]
    pub fn lowest_index(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(self.into_iter().map(|bit| if bit { '#' } else { '.' }), f)
    }
}

/// Iterator for the bits in a [`Bitboard`], in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    next_index: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.contains_index(self.next_index);
        self.next_index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            next_index: 0,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_zero_is_lowest_bit() {
        assert_eq!(Bitboard::from_index(0), Bitboard::from(1));
        assert_eq!(Bitboard::from_index(63), Bitboard::from(1 << 63));
    }

    #[test]
    fn counts() {
        let bitboard = Bitboard::from(0b1011);
        assert_eq!(bitboard.count_occupied(), 3);
        assert_eq!(Bitboard::from(u64::MAX).count_occupied(), 64);
        assert!(Bitboard::EMPTY.is_empty());
    }

    #[test]
    fn lowest_index() {
        assert_eq!(Bitboard::EMPTY.lowest_index(), None);
        assert_eq!(Bitboard::from(0b1100).lowest_index(), Some(2));
    }

    #[test]
    fn bits_are_row_major() {
        let bits: Vec<bool> = Bitboard::from_index(9).into_iter().collect();
        assert_eq!(bits.len(), 64);
        assert!(bits[9]);
        assert_eq!(bits.iter().filter(|&&bit| bit).count(), 1);
    }

    #[test]
    fn display_marks_set_bits() {
        let rendered = Bitboard::from_index(0).to_string();
        let first_row = rendered.lines().nth(1).unwrap();
        assert_eq!(first_row.trim_end(), " 1 # . . . . . . .");
    }
}
