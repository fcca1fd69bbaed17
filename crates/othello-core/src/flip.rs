//! Disc flip calculation for move execution.

use crate::bitboard::{Bitboard, DIRECTIONS};
use crate::square::Square;

/// Calculates which opponent discs would be flipped by placing a disc at the given square.
///
/// Each of the eight directions is resolved independently: starting next to
/// `sq`, the ray collects opponent discs until it reaches a cell that is not
/// an opponent disc. The collected run is captured only if that cell belongs
/// to the player; a ray that meets an empty cell or leaves the board captures
/// nothing.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `p` - Bitboard representing the current player's discs
/// * `o` - Bitboard representing the opponent's discs
///
/// # Returns
///
/// A bitboard representing all opponent discs that would be flipped by this move.
/// Returns an empty bitboard if no discs would be flipped (invalid move).
#[inline]
pub fn flip(sq: Square, p: Bitboard, o: Bitboard) -> Bitboard {
    let player = p.bits();
    let opponent = o.bits();
    let origin = sq.bitboard().bits();

    let mut flipped = 0;
    for dir in DIRECTIONS {
        let mut run = 0;
        let mut cur = dir.step(origin);
        while cur & opponent != 0 {
            run |= cur;
            cur = dir.step(cur);
        }
        if cur & player != 0 {
            flipped |= run;
        }
    }
    Bitboard::new(flipped)
}
