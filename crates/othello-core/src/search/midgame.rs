//! Fixed-depth midgame search.

use std::sync::Arc;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval;
use crate::move_list::MoveList;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::search::{SearchProgressCallback, search_root_moves};
use crate::types::{Depth, Score};

/// Scores every legal move with a `depth`-ply negamax search.
///
/// # Arguments
///
/// * `board` - Position to search.
/// * `depth` - Search depth in plies including the root move (at least 1).
/// * `callback` - Optional progress callback.
pub fn search_root(
    board: &Board,
    depth: Depth,
    callback: Option<Arc<SearchProgressCallback>>,
) -> SearchResult {
    let mut ctx = SearchContext::new();
    search_root_moves(&mut ctx, board, depth, false, callback, |ctx, next, alpha| {
        search(ctx, next, depth - 1, -SCORE_INF, -alpha)
    })
}

/// Negamax search with alpha-beta pruning.
///
/// Returns the score of `board` for the side to move. A pass hands the turn
/// over without consuming depth; when neither side can move the final disc
/// margin is returned, scaled above any heuristic value.
pub fn search(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    beta: Score,
) -> Score {
    ctx.increment_nodes();

    let moves = board.get_moves();
    if moves.is_empty() {
        let next = board.switch_players();
        if !next.has_legal_moves() {
            return eval::terminal_score(board);
        }
        if depth == 0 {
            return eval::evaluate(board);
        }
        return -search(ctx, &next, depth, -beta, -alpha);
    }

    if depth == 0 {
        return eval::evaluate(board);
    }

    let mut best_score = -SCORE_INF;
    for m in MoveList::with_moves(board, moves).iter() {
        let next = board.make_move_with_flipped(m.flipped, m.sq);
        let score = -search(ctx, &next, depth - 1, -beta, -alpha);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TERMINAL_DISC_WEIGHT;
    use crate::square::Square;

    fn minimax(board: &Board, depth: Depth) -> Score {
        let moves = board.get_moves();
        if moves.is_empty() {
            let next = board.switch_players();
            if !next.has_legal_moves() {
                return eval::terminal_score(board);
            }
            if depth == 0 {
                return eval::evaluate(board);
            }
            return -minimax(&next, depth);
        }
        if depth == 0 {
            return eval::evaluate(board);
        }
        moves
            .iter()
            .map(|sq| -minimax(&board.make_move(sq), depth - 1))
            .max()
            .unwrap_or(-SCORE_INF)
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let mut board = Board::new();
        for sq in [Square::D3, Square::C5, Square::F6] {
            for depth in 0..=3 {
                let mut ctx = SearchContext::new();
                assert_eq!(
                    search(&mut ctx, &board, depth, -SCORE_INF, SCORE_INF),
                    minimax(&board, depth)
                );
            }
            board = board.make_move(sq);
        }
    }

    #[test]
    fn test_terminal_position() {
        let board = Board::from_bitboards(Square::A1.bitboard() | Square::B1.bitboard(), 0u64);
        let mut ctx = SearchContext::new();
        assert_eq!(
            search(&mut ctx, &board, 4, -SCORE_INF, SCORE_INF),
            2 * TERMINAL_DISC_WEIGHT
        );
        assert_eq!(ctx.n_nodes, 1);
    }

    #[test]
    fn test_root_depth_one_picks_best_static_reply() {
        let board = Board::new();
        let result = search_root(&board, 1, None);
        let best = MoveList::new(&board)
            .iter()
            .map(|m| -eval::evaluate(&board.make_move_with_flipped(m.flipped, m.sq)))
            .max()
            .unwrap();
        assert_eq!(result.score, best);
        assert_eq!(result.n_nodes, 4);
        assert!(!result.is_endgame);
    }
}
