//! Game tree search engine.

mod endgame;
mod midgame;
pub mod options;
pub mod search_context;
pub mod search_result;

use std::sync::Arc;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::move_list::MoveList;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::{Depth, Score};

pub use options::{SearchOptions, SearchRunOptions};

/// Main search engine structure.
pub struct Search {
    options: SearchOptions,
    endgame_start_n_empties: Option<u32>,
}

/// Progress information during search.
///
/// Reported after each root move has been scored; `best_move` and `score`
/// describe the best root move found so far.
#[derive(Clone, Debug)]
pub struct SearchProgress {
    pub depth: Depth,
    pub score: Score,
    pub best_move: Square,
    pub nodes: u64,
    pub is_endgame: bool,
}

/// Type alias for search progress callback.
pub type SearchProgressCallback = dyn Fn(SearchProgress) + Send + Sync + 'static;

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            options: *options,
            endgame_start_n_empties: None,
        }
    }

    /// Resets the search state for a new game.
    pub fn init(&mut self) {
        self.endgame_start_n_empties = None;
    }

    /// Returns the options this engine was created with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Returns `true` once a search has switched to exhaustive endgame mode.
    ///
    /// The flag stays raised for the rest of the game; a position with more
    /// empty squares than the one that raised it clears it.
    pub fn is_endgame(&self) -> bool {
        self.endgame_start_n_empties.is_some()
    }

    /// Runs a search on the given board position.
    ///
    /// With more than `final_search` empty squares a fixed-depth negamax with
    /// alpha-beta pruning scores every legal move. At or below the threshold
    /// the remaining game tree is searched to the end and scores are exact
    /// disc differences.
    ///
    /// Root moves are tried in increasing square order and a later move
    /// replaces the current best only with a strictly higher score, so the
    /// result is reproducible.
    pub fn run(&mut self, board: &Board, options: &SearchRunOptions) -> SearchResult {
        let n_empties = board.get_empty_count();
        if let Some(start) = self.endgame_start_n_empties
            && n_empties > start
        {
            self.endgame_start_n_empties = None;
        }
        if self.endgame_start_n_empties.is_none() && n_empties <= self.options.final_search {
            self.endgame_start_n_empties = Some(n_empties);
        }

        let callback = options.callback.clone();
        if self.is_endgame() {
            endgame::search_root(board, callback)
        } else {
            midgame::search_root(board, self.options.max_depth.max(1), callback)
        }
    }

    /// Selects the move to play, or `None` when the side to move must pass.
    pub fn select_move(&mut self, board: &Board) -> Option<Square> {
        self.run(board, &SearchRunOptions::default()).best_move
    }
}

/// Scores every root move with `score_child` and keeps the first best one.
///
/// `score_child` receives the position after the root move, seen from the
/// opponent, together with the current root alpha, and returns the score
/// from the opponent's perspective.
fn search_root_moves<F>(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    is_endgame: bool,
    callback: Option<Arc<SearchProgressCallback>>,
    mut score_child: F,
) -> SearchResult
where
    F: FnMut(&mut SearchContext, &Board, Score) -> Score,
{
    let move_list = MoveList::new(board);
    let mut best: Option<(Square, Score)> = None;

    for m in move_list.iter() {
        let next = board.make_move_with_flipped(m.flipped, m.sq);
        let alpha = best.map_or(-SCORE_INF, |(_, score)| score);
        let score = -score_child(ctx, &next, alpha);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((m.sq, score));
        }

        if let (Some(callback), Some((best_move, best_score))) = (&callback, best) {
            callback(SearchProgress {
                depth,
                score: best_score,
                best_move,
                nodes: ctx.n_nodes,
                is_endgame,
            });
        }
    }

    match best {
        Some((sq, score)) => SearchResult::new(Some(sq), score, ctx.n_nodes, depth, is_endgame),
        None => SearchResult::new(None, 0, ctx.n_nodes, depth, is_endgame),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::disc::Disc;

    #[test]
    fn test_opening_move_is_legal_and_deterministic() {
        let board = Board::new();
        let mut search = Search::new(&SearchOptions::default());
        let first = search.select_move(&board);
        let second = search.select_move(&board);
        assert!(first.is_some_and(|sq| board.is_legal_move(sq)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_move_when_passing() {
        let board = Board::from_bitboards(Square::A1.bitboard(), Square::H8.bitboard());
        let mut search = Search::new(&SearchOptions::default());
        let result = search.run(&board, &SearchRunOptions::default());
        assert!(result.best_move.is_none());
    }

    #[test]
    fn test_single_legal_move_is_returned() {
        // only C1 brackets B1 against A1
        let board = Board::from_string(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             -------O",
            Disc::Black,
        )
        .unwrap();
        assert_eq!(board.get_moves().count(), 1);
        for max_depth in 1..=4 {
            let mut search = Search::new(&SearchOptions {
                max_depth,
                final_search: 0,
            });
            assert_eq!(search.select_move(&board), Some(Square::C1));
        }
    }

    #[test]
    fn test_endgame_flag_latches() {
        let mut search = Search::new(&SearchOptions::default());
        search.run(&Board::new(), &SearchRunOptions::default());
        assert!(!search.is_endgame());

        let board = Board::from_string(
            "XXXXXXXOXOOXXXXOXOXXXOXOXOOXOXXOXOXOOOXOXOOOOOXOXOOOXXXO-X-OXOOO",
            Disc::Black,
        )
        .unwrap();
        let result = search.run(&board, &SearchRunOptions::default());
        assert!(result.is_endgame);
        assert!(search.is_endgame());
        assert_eq!(result.depth, 2);

        search.run(&Board::new(), &SearchRunOptions::default());
        assert!(!search.is_endgame());

        search.run(&board, &SearchRunOptions::default());
        search.init();
        assert!(!search.is_endgame());
    }

    #[test]
    fn test_progress_callback() {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let sink = reports.clone();
        let callback: Arc<SearchProgressCallback> = Arc::new(move |progress: SearchProgress| {
            sink.lock().unwrap().push(progress);
        });

        let mut search = Search::new(&SearchOptions {
            max_depth: 3,
            final_search: 0,
        });
        let result = search.run(&Board::new(), &SearchRunOptions::with_callback(callback));

        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 4);
        let last = reports.last().unwrap();
        assert_eq!(Some(last.best_move), result.best_move);
        assert_eq!(last.score, result.score);
        assert_eq!(last.nodes, result.n_nodes);
        assert!(reports.iter().all(|p| p.depth == 3 && !p.is_endgame));
    }
}
