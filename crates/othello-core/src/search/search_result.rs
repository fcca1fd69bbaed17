//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Score of the best move from the side to move's perspective.
    ///
    /// An exact final disc difference when `is_endgame` is set, otherwise a
    /// heuristic score (decided games are scaled by
    /// [`TERMINAL_DISC_WEIGHT`](crate::constants::TERMINAL_DISC_WEIGHT)).
    pub score: Score,
    /// Best move, `None` when the side to move has to pass.
    pub best_move: Option<Square>,
    pub n_nodes: u64,
    /// Search depth in plies; the number of empty squares in endgame mode.
    pub depth: Depth,
    pub is_endgame: bool,
}

impl SearchResult {
    pub fn new(
        best_move: Option<Square>,
        score: Score,
        n_nodes: u64,
        depth: Depth,
        is_endgame: bool,
    ) -> Self {
        Self {
            score,
            best_move,
            n_nodes,
            depth,
            is_endgame,
        }
    }
}
