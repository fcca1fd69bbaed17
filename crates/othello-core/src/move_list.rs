//! Legal move enumeration with precomputed flips.

use arrayvec::ArrayVec;
use std::slice;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::flip;
use crate::square::Square;

/// Maximum number of moves possible in an Othello position.
const MAX_MOVES: usize = 34;

/// Represents a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Bitboard representing all opponent discs flipped by this move.
    pub flipped: Bitboard,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flipped: Bitboard) -> Move {
        debug_assert!(!flipped.is_empty(), "Move must flip at least one disc");
        Move { sq, flipped }
    }
}

/// All legal moves of a position, in increasing cell index order.
///
/// The search relies on this order for its tie-break: among equally scored
/// moves the first one wins.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for the current player.
    ///
    /// # Arguments
    ///
    /// * `board` - The current game state
    ///
    /// # Returns
    ///
    /// A new MoveList containing all legal moves for the current player.
    #[inline]
    pub fn new(board: &Board) -> MoveList {
        Self::with_moves(board, board.get_moves())
    }

    /// Creates a MoveList from a precomputed legal moves bitboard.
    #[inline]
    pub fn with_moves(board: &Board, moves_bb: Bitboard) -> MoveList {
        let mut moves = ArrayVec::new();
        for sq in moves_bb.iter() {
            let flipped = flip::flip(sq, board.player, board.opponent);
            moves.push(Move::new(sq, flipped));
        }
        MoveList { moves }
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` when the side to move has to pass.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any exists.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the squares of all moves.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(|m| m.sq)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
