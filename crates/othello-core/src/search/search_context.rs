//! Per-search mutable state.

/// State shared by all nodes of one search call.
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Number of nodes visited, root children included.
    pub n_nodes: u64,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    #[inline(always)]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }
}
