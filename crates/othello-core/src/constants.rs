//! Global constants

use crate::types::{Depth, Score};

/// Default midgame search depth in plies, counting the root move.
pub const MAX_DEPTH: Depth = 6;

/// Number of empty squares at which the search becomes exhaustive.
pub const FINAL_SEARCH: u32 = 10;

/// Maximum possible score (disc difference).
pub const SCORE_MAX: Score = 64;

/// Weight of one disc of final margin in midgame scores.
///
/// Larger than any heuristic evaluation, so a won terminal position always
/// outranks a non-terminal one.
pub const TERMINAL_DISC_WEIGHT: Score = 10_000;

/// Infinity score for search algorithms.
pub const SCORE_INF: Score = 1_000_000;
