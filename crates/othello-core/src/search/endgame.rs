//! Exhaustive endgame search.

use std::sync::Arc;

use crate::board::Board;
use crate::constants::{SCORE_INF, SCORE_MAX};
use crate::move_list::MoveList;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::search::{SearchProgressCallback, search_root_moves};
use crate::types::Score;

/// Solves the position: every legal move gets its exact final disc margin.
///
/// # Arguments
///
/// * `board` - Position to solve.
/// * `callback` - Optional progress callback.
pub fn search_root(board: &Board, callback: Option<Arc<SearchProgressCallback>>) -> SearchResult {
    let mut ctx = SearchContext::new();
    let n_empties = board.get_empty_count();
    search_root_moves(&mut ctx, board, n_empties, true, callback, |ctx, next, alpha| {
        let alpha = alpha.clamp(-SCORE_MAX - 1, SCORE_MAX);
        search(ctx, next, -SCORE_MAX - 1, -alpha)
    })
}

/// Negamax search to the end of the game.
///
/// Returns the final disc difference (side to move minus opponent) under
/// best play, or a bound outside the `alpha`/`beta` window.
pub fn search(ctx: &mut SearchContext, board: &Board, mut alpha: Score, beta: Score) -> Score {
    ctx.increment_nodes();

    let moves = board.get_moves();
    if moves.is_empty() {
        let next = board.switch_players();
        if !next.has_legal_moves() {
            return board.disc_difference();
        }
        return -search(ctx, &next, -beta, -alpha);
    }

    let mut best_score = -SCORE_INF;
    for m in MoveList::with_moves(board, moves).iter() {
        let next = board.make_move_with_flipped(m.flipped, m.sq);
        let score = -search(ctx, &next, -beta, -alpha);

        if score > best_score {
            best_score = score;
            if score > alpha {
                alpha = score;
                if alpha >= beta {
                    break;
                }
            }
        }
    }
    best_score
}
