//! Search results.

use core::fmt;

use serde::Serialize;

/// Why a search produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoPath {
    /// The start node is not a key of the graph.
    UnknownStart,
    /// The goal node is not a key of the graph.
    UnknownGoal,
    /// Both endpoints are keys but the goal cannot be reached (within the hop limit, if any).
    Unreachable,
}

impl fmt::Display for NoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoPath::UnknownStart => "start node is not a key of the graph",
            NoPath::UnknownGoal => "goal node is not a key of the graph",
            NoPath::Unreachable => "goal is not reachable from start",
        })
    }
}

impl std::error::Error for NoPath {}

/// Traversal counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes marked visited, the start included. The goal is never counted.
    pub nodes_visited: usize,
    /// Largest queue length observed.
    pub max_frontier: usize,
}

/// Result of [`ShortestPathFinder::search`](crate::ShortestPathFinder::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<N> {
    /// The shortest path, start and goal inclusive, or the reason there is none.
    pub path: Result<Vec<N>, NoPath>,
    /// Traversal counters.
    pub stats: SearchStats,
}

impl<N> SearchOutcome<N> {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_ok()
    }

    /// Number of edges on the path, if one was found.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().ok().map(|p| p.len() - 1)
    }

    /// Borrows the path, if one was found.
    pub fn as_path(&self) -> Option<&[N]> {
        self.path.as_deref().ok()
    }

    /// Converts into the plain path, collapsing every [`NoPath`] into an empty vector.
    pub fn into_path(self) -> Vec<N> {
        self.path.unwrap_or_default()
    }
}
