//! Bitboard operations and types.
//!
//! This module provides a [`Bitboard`] type that represents a set of cells on the
//! 8x8 board using a single `u64`, where each bit corresponds to a square
//! (bit 0 = A1, bit 63 = H8).

use crate::square::Square;

/// Mask of every square except column A.
const NOT_FILE_A: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// Mask of every square except column H.
const NOT_FILE_H: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// One of the eight compass directions, as a bit shift plus the mask that
/// drops bits which wrapped around a board edge.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Direction {
    shift: i32,
    mask: u64,
}

impl Direction {
    /// Moves every bit of `bits` one step in this direction.
    ///
    /// Bits that would leave the board are discarded.
    #[inline(always)]
    pub(crate) const fn step(self, bits: u64) -> u64 {
        if self.shift > 0 {
            (bits << self.shift as u32) & self.mask
        } else {
            (bits >> (-self.shift) as u32) & self.mask
        }
    }
}

/// The eight directions: E, W, S, N, SE, SW, NE, NW.
///
/// "South" increases the row (A1 towards A8).
pub(crate) const DIRECTIONS: [Direction; 8] = [
    Direction { shift: 1, mask: NOT_FILE_A },
    Direction { shift: -1, mask: NOT_FILE_H },
    Direction { shift: 8, mask: u64::MAX },
    Direction { shift: -8, mask: u64::MAX },
    Direction { shift: 9, mask: NOT_FILE_A },
    Direction { shift: 7, mask: NOT_FILE_H },
    Direction { shift: -7, mask: NOT_FILE_A },
    Direction { shift: -9, mask: NOT_FILE_H },
];

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a new bitboard with the bit at the given square set.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard().0)
    }

    /// Returns a new bitboard with the bit at the given square removed.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to clear.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit cleared.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard().0)
    }

    /// Checks if the bitboard contains the bit at the given square.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard().0 != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    ///
    /// # Returns
    ///
    /// The number of bits set in the bitboard (0-64).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns a new bitboard with the least significant bit cleared.
    #[inline(always)]
    pub const fn clear_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Returns the square corresponding to the least significant set bit.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the LSB position, or `None` if the bitboard is empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_usize_unchecked(self.0.trailing_zeros() as usize))
        }
    }

    /// Removes and returns the least significant set bit as a square,
    /// along with the updated bitboard.
    ///
    /// # Panics
    ///
    /// Panics if the bitboard is empty in debug mode.
    #[inline(always)]
    pub fn pop_lsb(self) -> (Square, Self) {
        debug_assert!(!self.is_empty(), "pop_lsb called on empty bitboard");
        let sq = Square::from_usize_unchecked(self.0.trailing_zeros() as usize);
        (sq, self.clear_lsb())
    }

    /// Returns an iterator over all set squares in increasing index order.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }

    /// Returns the mover's bitboard after placing a disc on `sq` and
    /// capturing `flipped`.
    ///
    /// # Arguments
    ///
    /// * `flipped` - Bitboard of opponent discs flipped by this move.
    /// * `sq` - Square where the disc was placed.
    #[inline(always)]
    pub fn apply_move(self, flipped: Bitboard, sq: Square) -> Bitboard {
        self ^ flipped ^ sq.bitboard()
    }

    /// Returns the opponent's bitboard after losing `flipped`.
    #[inline(always)]
    pub fn apply_flip(self, flipped: Bitboard) -> Bitboard {
        self ^ flipped
    }

    /// Gets the legal moves for the player owning this bitboard.
    ///
    /// A cell is legal when it is empty and, in at least one of the eight
    /// directions, a run of one or more opponent discs leads from it to one of
    /// the player's discs without leaving the board. The rays are cast from
    /// the player's discs towards the empty cells, all eight directions at
    /// once.
    ///
    /// # Arguments
    ///
    /// * `opponent` - The opponent's bitboard.
    ///
    /// # Returns
    ///
    /// A `Bitboard` with bits set for each legal move position. Empty when the
    /// player has to pass.
    #[inline]
    pub fn get_moves(self, opponent: Bitboard) -> Bitboard {
        let player = self.0;
        let opponent = opponent.0;
        let empty = !(player | opponent);

        let mut moves = 0;
        for dir in DIRECTIONS {
            let mut run = dir.step(player) & opponent;
            // a run of opponent discs is at most six cells long
            for _ in 0..5 {
                run |= dir.step(run) & opponent;
            }
            moves |= dir.step(run) & empty;
        }
        Bitboard(moves)
    }
}

// Operator trait implementations

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard(0), |bb, sq| bb.set(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

impl std::fmt::Display for Bitboard {
    /// Prints row 1 first, one line per row, `1` for set and `.` for clear.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let sq = row * 8 + col;
                if (self.0 >> sq) & 1 != 0 {
                    write!(f, "1")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An iterator that yields each set bit position in a bitboard as a `Square`,
/// lowest index first.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    /// Creates a new `BitboardIterator`.
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            return None;
        }

        let (square, rest) = self.bitboard.pop_lsb();
        self.bitboard = rest;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}
