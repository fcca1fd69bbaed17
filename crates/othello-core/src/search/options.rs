//! Search configuration.

use std::sync::Arc;

use crate::constants::{FINAL_SEARCH, MAX_DEPTH};
use crate::search::SearchProgressCallback;
use crate::types::Depth;

/// Engine configuration fixed for the lifetime of a [`Search`](crate::search::Search).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Midgame search depth in plies, counting the root move.
    pub max_depth: Depth,
    /// Number of empty squares at or below which the search is exhaustive.
    pub final_search: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_depth: MAX_DEPTH,
            final_search: FINAL_SEARCH,
        }
    }
}

/// Per-call options for [`Search::run`](crate::search::Search::run).
#[derive(Clone, Default)]
pub struct SearchRunOptions {
    /// Receives a [`SearchProgress`](crate::search::SearchProgress) after each root move.
    pub callback: Option<Arc<SearchProgressCallback>>,
}

impl SearchRunOptions {
    /// Creates run options reporting progress to `callback`.
    pub fn with_callback(callback: Arc<SearchProgressCallback>) -> Self {
        SearchRunOptions {
            callback: Some(callback),
        }
    }
}
