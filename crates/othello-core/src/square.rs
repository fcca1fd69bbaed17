use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::error::SquareError;

/// Represents a cell on the Othello board, ranging from A1 to H8.
///
/// Columns are labeled A-H and rows 1-8. A square's index is
/// `row * 8 + col`, so row = index / 8 and column = index % 8:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

impl Square {
    /// Returns a bitboard with only this square set.
    ///
    /// A1 is bit 0, H8 is bit 63.
    #[inline(always)]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self as u8)
    }

    /// Returns the cell index (0-63).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square` without bounds checking.
    ///
    /// # Arguments
    ///
    /// * `index` - The cell index. Must be below 64.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` >= 64.
    #[inline(always)]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index}"
        );
        // SAFETY: `Square` is `repr(u8)` with 64 contiguous variants starting at 0.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Converts an index into a `Square`, rejecting anything outside 0..64.
    ///
    /// # Arguments
    ///
    /// * `index` - The cell index.
    ///
    /// # Returns
    ///
    /// The square, or `SquareError::IndexOutOfRange`.
    pub fn from_index(index: usize) -> Result<Square, SquareError> {
        if index < TOTAL_SQUARES {
            Ok(Square::from_usize_unchecked(index))
        } else {
            Err(SquareError::IndexOutOfRange(index))
        }
    }

    /// Creates a `Square` from row and column coordinates.
    ///
    /// # Arguments
    ///
    /// * `row` - Row index (0-7), 0 is row 1.
    /// * `col` - Column index (0-7), 0 is column A.
    ///
    /// # Returns
    ///
    /// The square, or `SquareError::CoordinateOutOfRange` if either
    /// coordinate is 8 or more.
    pub fn from_row_col(row: usize, col: usize) -> Result<Square, SquareError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(SquareError::CoordinateOutOfRange { row, col });
        }
        Ok(Square::from_usize_unchecked(row * BOARD_SIZE + col))
    }

    /// Returns the row (0-7) of this square.
    #[inline]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0-7) of this square.
    #[inline]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns an iterator over all 64 squares in index order (A1 to H8).
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_usize_unchecked)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` or `"H8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Square::from_row_col(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.col() as u8 + b'a') as char;
        let rank = (self.row() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
