//! Move generation verification by node counting.

use crate::board::Board;
use crate::move_list::MoveList;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), depth)
}

/// Counts the leaves of the game tree below `board`, `depth` plies deep.
///
/// A pass does not consume depth and a finished game counts as one leaf.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = MoveList::new(board);
    if move_list.is_empty() {
        let next = board.switch_players();
        return if next.has_legal_moves() {
            perft(&next, depth)
        } else {
            1
        };
    }

    if depth == 1 {
        return move_list.count() as u64;
    }
    move_list
        .iter()
        .map(|m| perft(&board.make_move_with_flipped(m.flipped, m.sq), depth - 1))
        .sum()
}
