//! Search configuration.

use serde::{Deserialize, Serialize};

/// How the breadth-first search remembers the way back to the start.
///
/// Both strategies explore nodes in the same order and return the same path;
/// they differ only in memory use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every queue entry carries the full path prefix from the start.
    ///
    /// `O(V * L)` path storage for `V` visited nodes and path length `L`, no
    /// reconstruction step.
    #[default]
    PathPrefix,
    /// Queue entries are single nodes; a predecessor map rebuilds the path.
    ///
    /// `O(V)` storage. Preferable when paths are expected to be long.
    Predecessor,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 2] = [Strategy::PathPrefix, Strategy::Predecessor];

    /// Stable lowercase name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::PathPrefix => "path_prefix",
            Strategy::Predecessor => "predecessor",
        }
    }
}

/// Options for a [`ShortestPathFinder`](crate::ShortestPathFinder).
///
/// The default is the plain unbounded path-prefix search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Traversal bookkeeping strategy.
    pub strategy: Strategy,
    /// Upper bound on the number of edges in a returned path.
    ///
    /// `None` searches the whole reachable component.
    pub max_hops: Option<usize>,
}

impl SearchConfig {
    /// The default configuration.
    pub const fn new() -> Self {
        Self {
            strategy: Strategy::PathPrefix,
            max_hops: None,
        }
    }

    /// Sets the traversal strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Limits returned paths to at most `max_hops` edges.
    #[must_use]
    pub const fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = Some(max_hops);
        self
    }

    /// Removes any hop limit.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_hops = None;
        self
    }

    /// Returns `true` if a path prefix with `hops` edges may not be extended further.
    #[inline]
    pub(crate) fn exhausted(&self, hops: usize) -> bool {
        matches!(self.max_hops, Some(max) if hops >= max)
    }
}
