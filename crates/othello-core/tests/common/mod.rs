#![allow(dead_code)]

use othello_core::board::Board;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

/// Plays random moves from the opening until `n_empties` squares are left.
///
/// Returns `None` if the game ends earlier.
pub fn random_position(seed: u64, n_empties: u32) -> Option<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    while board.get_empty_count() > n_empties {
        match board.get_moves().iter().choose(&mut rng) {
            Some(sq) => board = board.make_move(sq),
            None if board.switch_players().has_legal_moves() => board = board.switch_players(),
            None => return None,
        }
    }
    Some(board)
}

/// Plain minimax to the end of the game, no pruning.
///
/// Returns the final disc difference for the side to move under best play.
pub fn brute_force(board: &Board) -> i32 {
    let moves = board.get_moves();
    if moves.is_empty() {
        let next = board.switch_players();
        if !next.has_legal_moves() {
            return board.disc_difference();
        }
        return -brute_force(&next);
    }
    moves
        .iter()
        .map(|sq| -brute_force(&board.make_move(sq)))
        .max()
        .unwrap_or(i32::MIN)
}
