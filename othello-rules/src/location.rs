//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as its row-major flat index
/// (`row * 8 + col`). Locations order the same way they are enumerated:
/// smallest row first, then smallest column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Into)]
pub struct Location(u8);

/// A set of locations on the Othello board, which can be iterated to retrieve them
/// in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a row-major flat index.
    /// Panics if `index` is not on the board.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES, "index {} is off the board", index);
        Self(index)
    }

    /// Convert into a row-major flat index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Convert from row and column coordinates.
    /// Panics if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Self {
        Self::try_from_coords(row, col)
            .unwrap_or_else(|| panic!("({}, {}) is off the board", row, col))
    }

    /// Convert from row and column coordinates, or `None` if they are off the board.
    pub fn try_from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        } else {
            None
        }
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// The neighbouring location one step along `(d_row, d_col)`,
    /// or `None` when that step leaves the board.
    #[inline]
    pub fn step(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let row = self.row() as isize + d_row;
        let col = self.col() as isize + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::try_from_coords(row as usize, col as usize)
    }

    /// A one-hot [`Bitboard`] holding this location.
    #[inline]
    pub fn to_bitboard(self) -> Bitboard {
        Bitboard::from_index(self.0 as usize)
    }

    /// Iterate over every location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Self)
    }
}

/// Convert this [`Location`] into string notation ("A4": column letter, then 1-based row).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation ("A4"), case-insensitive.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::try_from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    pub const EMPTY: Self = Self(Bitboard::EMPTY);

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(loc.to_bitboard() & self.0).is_empty()
    }

    /// Returns whether the list holds no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Add `loc` to the list.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.to_bitboard();
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::EMPTY;
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let index = self.0.lowest_index()?;
        let next_move = Location(index as u8);
        self.0 ^= next_move.to_bitboard();
        Some(next_move)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", string)
    }
}
