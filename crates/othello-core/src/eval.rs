//! Static position evaluation.
//!
//! Non-terminal leaves are scored with a square weight table plus a mobility
//! term. Terminal positions are scored by the final disc margin scaled by
//! [`TERMINAL_DISC_WEIGHT`], which keeps every decided game outside the range
//! of the heuristic.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::constants::TERMINAL_DISC_WEIGHT;
use crate::types::Score;

/// Square weights, A1 first.
///
/// Corners are worth the most; the X and C squares next to an empty corner
/// are penalized.
#[rustfmt::skip]
const SQUARE_WEIGHTS: [Score; 64] = [
    100, -20,  10,   5,   5,  10, -20, 100,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
     10,  -2,  -1,  -1,  -1,  -1,  -2,  10,
      5,  -2,  -1,  -1,  -1,  -1,  -2,   5,
      5,  -2,  -1,  -1,  -1,  -1,  -2,   5,
     10,  -2,  -1,  -1,  -1,  -1,  -2,  10,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
    100, -20,  10,   5,   5,  10, -20, 100,
];

/// Score per legal move of mobility advantage.
const MOBILITY_WEIGHT: Score = 5;

/// Sums the square weights of the given discs.
#[inline]
pub fn positional_score(discs: Bitboard) -> Score {
    discs.iter().map(|sq| SQUARE_WEIGHTS[sq.index()]).sum()
}

/// Evaluates a non-terminal position from the side to move's perspective.
///
/// # Arguments
///
/// * `board` - The position to evaluate.
///
/// # Returns
///
/// Positional balance plus weighted mobility difference. The magnitude stays
/// well below [`TERMINAL_DISC_WEIGHT`].
pub fn evaluate(board: &Board) -> Score {
    let positional = positional_score(board.player) - positional_score(board.opponent);
    let mobility = board.get_moves().count() as Score
        - board.switch_players().get_moves().count() as Score;
    positional + MOBILITY_WEIGHT * mobility
}

/// Scores a finished game from the side to move's perspective.
#[inline]
pub fn terminal_score(board: &Board) -> Score {
    board.disc_difference() * TERMINAL_DISC_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::square::Square;

    #[test]
    fn test_weights_are_symmetric() {
        for sq in Square::iter() {
            let mirrored_col = sq.row() * 8 + (7 - sq.col());
            let mirrored_row = (7 - sq.row()) * 8 + sq.col();
            let transposed = sq.col() * 8 + sq.row();
            let w = SQUARE_WEIGHTS[sq.index()];
            assert_eq!(w, SQUARE_WEIGHTS[mirrored_col]);
            assert_eq!(w, SQUARE_WEIGHTS[mirrored_row]);
            assert_eq!(w, SQUARE_WEIGHTS[transposed]);
        }
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let board = Board::new().make_move(Square::D3);
        let score = evaluate(&board);
        assert_eq!(score, -evaluate(&board.switch_players()));
    }

    #[test]
    fn test_corner_is_preferred() {
        let corner = Board::from_bitboards(Square::A1.bitboard(), Square::H8.bitboard().set(Square::B2));
        assert!(positional_score(corner.player) > positional_score(corner.opponent));
    }

    #[test]
    fn test_heuristic_bound() {
        let max_positional: Score = SQUARE_WEIGHTS.iter().map(|w| w.abs()).sum();
        assert!(max_positional + MOBILITY_WEIGHT * 64 < TERMINAL_DISC_WEIGHT);
    }

    #[test]
    fn test_terminal_score() {
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             OOOOOOOO\
             OOOOOOOO\
             OOOOOOOO\
             OOOOOOO-",
            Disc::Black,
        )
        .unwrap();
        assert_eq!(terminal_score(&board), TERMINAL_DISC_WEIGHT);
        assert_eq!(terminal_score(&board.switch_players()), -TERMINAL_DISC_WEIGHT);
    }
}
